// Engine module - list-state logic for collection grids
// This layer sits between the data model (types) and any presentation surface

pub mod codec;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod paginate;
pub mod selection;
pub mod sort;
pub mod stats;
mod view_model;

pub use codec::ListQueryState;
pub use controller::ListController;
pub use debounce::Debouncer;
pub use paginate::{PageMarker, PageSlice};
pub use selection::SelectionSet;
pub use stats::CollectionStats;
pub use view_model::ListViewModel;

use headshakers_types::{FilterCriteria, Item, SortOption};

// Façade API - stable entry points for callers that only need the
// stateless pieces and not a full controller

/// Keep only the items matching the given criteria, in their original order.
pub fn filter_items(items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter::matches(item, criteria))
        .cloned()
        .collect()
}

/// Stable in-place sort under the given sort order.
pub fn sort_items(items: &mut [Item], sort: SortOption) {
    items.sort_by(|a, b| sort::compare(a, b, sort));
}
