use serde::{Serialize, Serializer};

/// The window a clamped page request selects out of an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// The requested page corrected into `[1, total_pages]`.
    pub clamped_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
    /// Zero-based start of the visible window.
    pub offset: usize,
    /// Length of the visible window (can be short on the last page).
    pub len: usize,
}

impl PageSlice {
    /// 1-based display range for "Showing X to Y of Z".
    ///
    /// `None` when nothing is visible, so renderers never produce a
    /// "1 to 0 of 0" string.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.total_count == 0 {
            return None;
        }
        let start = self.offset + 1;
        let end = (self.offset + self.page_size).min(self.total_count);
        Some((start, end))
    }
}

/// Slice an ordered, filtered sequence of `total_count` items into a page.
///
/// Out-of-range requests (page 0, or a page beyond the end after a filter
/// shrank the result set) are clamped, never rejected. An empty sequence
/// still reports one page so the cursor always has somewhere valid to be.
pub fn paginate(total_count: usize, requested_page: usize, page_size: usize) -> PageSlice {
    let total_pages = total_count.div_ceil(page_size).max(1);
    let clamped_page = requested_page.clamp(1, total_pages);
    let offset = (clamped_page - 1) * page_size;
    let len = page_size.min(total_count.saturating_sub(offset));

    PageSlice {
        clamped_page,
        total_pages,
        total_count,
        page_size,
        offset,
        len,
    }
}

/// One slot in the page-number strip: a real page, or a collapsed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

// The ellipsis sentinel serializes as -1, distinct from any real page.
impl Serialize for PageMarker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageMarker::Page(n) => serializer.serialize_i64(*n as i64),
            PageMarker::Ellipsis => serializer.serialize_i64(-1),
        }
    }
}

/// Which page buttons to show: first, last, and a window around the
/// current page, with runs of skipped pages collapsed into one ellipsis.
pub fn page_markers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    const MAX_VISIBLE: usize = 7;

    if total_pages <= MAX_VISIBLE {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = vec![PageMarker::Page(1)];

    if current_page > 3 {
        markers.push(PageMarker::Ellipsis);
    }

    let window_start = current_page.saturating_sub(1).max(2);
    let window_end = (current_page + 1).min(total_pages - 1);
    for page in window_start..=window_end {
        markers.push(PageMarker::Page(page));
    }

    if current_page < total_pages - 2 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Page(total_pages));
    markers
}
