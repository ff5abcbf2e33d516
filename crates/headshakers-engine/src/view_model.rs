use crate::paginate::PageMarker;
use headshakers_types::Item;
use serde::Serialize;

/// The fully-derived, read-only snapshot the presentation layer renders.
///
/// Raw data only, no pre-formatted strings: JSON output is an API, and
/// the text renderer does its own formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewModel {
    /// This page only, already filtered and ordered.
    pub visible_items: Vec<Item>,
    pub total_filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    /// 1-based display bounds; absent when the filtered result is empty.
    pub start_item: Option<usize>,
    pub end_item: Option<usize>,
    /// Page-button strip; the ellipsis sentinel serializes as -1.
    pub page_markers: Vec<PageMarker>,
    pub is_filters_active: bool,
    /// The unfiltered collection has no items at all.
    pub is_empty: bool,
    /// The collection has items but the active filters match none.
    pub is_empty_due_to_filter: bool,
    pub is_selection_mode_active: bool,
    pub selected_count: usize,
}
