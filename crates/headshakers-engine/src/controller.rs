use crate::codec::ListQueryState;
use crate::selection::SelectionSet;
use crate::view_model::ListViewModel;
use crate::{filter, paginate, sort};
use headshakers_types::{
    FeaturedFilter, FieldFilter, FilterCriteria, Item, PageSize, PageState, SortOption, Vocabulary,
};
use std::collections::BTreeSet;

/// Owns the canonical list state for one collection grid and derives the
/// visible page from it.
///
/// Single-threaded and synchronous: every mutator completes inline,
/// re-clamping the page cursor against the filtered count so that
/// `view()` and `query_state()` always observe consistent state. No
/// operation panics for well-typed input; bad pages, unknown filter
/// values, and emptied result sets are absorbed by clamping/defaulting.
#[derive(Debug, Clone)]
pub struct ListController {
    items: Vec<Item>,
    vocabulary: Vocabulary,
    criteria: FilterCriteria,
    sort: SortOption,
    page: PageState,
    selection: SelectionSet,
    selection_mode: bool,
}

impl ListController {
    /// Controller over a fresh collection with default filter/sort/page.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_state(items, ListQueryState::default())
    }

    /// Controller seeded from decoded query-string state, e.g. when the
    /// grid is mounted from a shared or bookmarked URL. An out-of-range
    /// seeded page is clamped immediately.
    pub fn with_state(items: Vec<Item>, state: ListQueryState) -> Self {
        let vocabulary = Vocabulary::from_items(&items);
        let mut controller = Self {
            items,
            vocabulary,
            criteria: state.criteria,
            sort: state.sort,
            page: state.page,
            selection: SelectionSet::new(),
            selection_mode: false,
        };
        controller.clamp_page();
        controller
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn is_selection_mode_active(&self) -> bool {
        self.selection_mode
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The codec-facing slice of state, for pushing back out to the URL.
    pub fn query_state(&self) -> ListQueryState {
        ListQueryState {
            criteria: self.criteria.clone(),
            sort: self.sort,
            page: self.page,
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
        self.page.reset();
        self.clamp_page();
    }

    pub fn set_category(&mut self, category: FieldFilter) {
        self.criteria.category = category;
        self.page.reset();
        self.clamp_page();
    }

    pub fn set_condition(&mut self, condition: FieldFilter) {
        self.criteria.condition = condition;
        self.page.reset();
        self.clamp_page();
    }

    pub fn set_featured(&mut self, featured: FeaturedFilter) {
        self.criteria.featured = featured;
        self.page.reset();
        self.clamp_page();
    }

    /// Reset every criteria field, including search, back to default.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.page.reset();
        self.clamp_page();
    }

    /// Re-sorting keeps the user near where they were: the page index is
    /// re-clamped but never reset.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.clamp_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.current_page = page;
        self.clamp_page();
    }

    /// Changing density changes what "page 1" means, so the cursor resets.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page.page_size = page_size;
        self.page.reset();
        self.clamp_page();
    }

    /// Flip selection mode. Either transition leaves the selection empty:
    /// enabling starts fresh, disabling discards.
    pub fn toggle_selection_mode(&mut self) {
        self.selection_mode = !self.selection_mode;
        self.selection.clear();
    }

    /// No-op (not an error) when selection mode is off.
    pub fn toggle_item_selection(&mut self, id: &str) {
        if self.selection_mode {
            self.selection.toggle(id);
        }
    }

    /// Select every currently-matching item, or clear if they are all
    /// selected already. No-op when selection mode is off.
    pub fn select_all(&mut self) {
        if !self.selection_mode {
            return;
        }
        let filtered_ids: Vec<String> = self
            .filtered_refs()
            .into_iter()
            .map(|item| item.id.clone())
            .collect();
        self.selection.select_all(filtered_ids);
    }

    /// No-op when selection mode is off.
    pub fn clear_selection(&mut self) {
        if self.selection_mode {
            self.selection.clear();
        }
    }

    /// Replace the backing collection after the external data-fetch layer
    /// re-ran its query. Selection is pruned to the surviving ids, the
    /// vocabulary is re-derived, and the page cursor is re-clamped.
    pub fn refresh_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.vocabulary = Vocabulary::from_items(&self.items);

        let known: BTreeSet<&str> = self.items.iter().map(|item| item.id.as_str()).collect();
        self.selection.retain_known(&known);

        self.clamp_page();
    }

    /// Recompute the full derived snapshot: filter, then stable sort, then
    /// slice the current page.
    pub fn view(&self) -> ListViewModel {
        let mut filtered = self.filtered_refs();
        filtered.sort_by(|a, b| sort::compare(a, b, self.sort));

        let slice = paginate::paginate(
            filtered.len(),
            self.page.current_page,
            self.page.page_size.as_usize(),
        );

        let visible_items: Vec<Item> = filtered[slice.offset..slice.offset + slice.len]
            .iter()
            .map(|item| (*item).clone())
            .collect();

        let (start_item, end_item) = match slice.item_range() {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };

        ListViewModel {
            visible_items,
            total_filtered_count: slice.total_count,
            total_pages: slice.total_pages,
            current_page: slice.clamped_page,
            page_size: slice.page_size,
            start_item,
            end_item,
            page_markers: paginate::page_markers(slice.clamped_page, slice.total_pages),
            is_filters_active: self.criteria.is_active(),
            is_empty: self.items.is_empty(),
            is_empty_due_to_filter: !self.items.is_empty() && slice.total_count == 0,
            is_selection_mode_active: self.selection_mode,
            selected_count: self.selection.len(),
        }
    }

    fn filtered_refs(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| filter::matches(item, &self.criteria))
            .collect()
    }

    // Corrected pages are written back into PageState, not just the view,
    // so subsequent calls observe the clamped value.
    fn clamp_page(&mut self) {
        let count = self.filtered_refs().len();
        let slice = paginate::paginate(count, self.page.current_page, self.page.page_size.as_usize());
        self.page.current_page = slice.clamped_page;
    }
}
