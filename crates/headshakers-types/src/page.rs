use std::fmt;

/// Grid density: how many items one page holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
}

impl PageSize {
    pub const CHOICES: [PageSize; 3] = [PageSize::Twelve, PageSize::TwentyFour, PageSize::FortyEight];

    pub fn as_usize(self) -> usize {
        match self {
            PageSize::Twelve => 12,
            PageSize::TwentyFour => 24,
            PageSize::FortyEight => 48,
        }
    }

    /// Map a raw count back to the enumerated set; anything else yields
    /// `None` so callers can default.
    pub fn from_count(count: usize) -> Option<PageSize> {
        PageSize::CHOICES.iter().copied().find(|s| s.as_usize() == count)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// The 1-based page cursor plus density.
///
/// `current_page` is only ever written through the controller, which clamps
/// it to the valid range after every filter/sort/size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl PageState {
    /// Back to page one, keeping the density.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}
