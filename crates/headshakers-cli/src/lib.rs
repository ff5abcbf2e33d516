mod args;
mod commands;
mod handlers;
pub mod prefs;
mod render;
pub mod types;

pub use args::{Cli, Commands, PrefsCommand};
pub use commands::run;
