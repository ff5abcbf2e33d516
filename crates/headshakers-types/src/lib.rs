pub mod criteria;
pub mod item;
pub mod page;
pub mod sort;
pub mod vocabulary;

pub use criteria::*;
pub use item::*;
pub use page::*;
pub use sort::*;
pub use vocabulary::*;
