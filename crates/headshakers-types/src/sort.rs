use std::fmt;

/// The closed set of sort orders a list can be in. Exactly one is active
/// at a time; the default is explicit, never implicit-undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    NameAsc,
    NameDesc,
    CountAsc,
    CountDesc,
    ValueAsc,
    ValueDesc,
    LikesDesc,
    ViewsDesc,
    CommentsDesc,
    Newest,
    Oldest,
}

impl SortOption {
    pub const ALL: [SortOption; 11] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::CountAsc,
        SortOption::CountDesc,
        SortOption::ValueAsc,
        SortOption::ValueDesc,
        SortOption::LikesDesc,
        SortOption::ViewsDesc,
        SortOption::CommentsDesc,
        SortOption::Newest,
        SortOption::Oldest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::CountAsc => "count-asc",
            SortOption::CountDesc => "count-desc",
            SortOption::ValueAsc => "value-asc",
            SortOption::ValueDesc => "value-desc",
            SortOption::LikesDesc => "likes-desc",
            SortOption::ViewsDesc => "views-desc",
            SortOption::CommentsDesc => "comments-desc",
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
        }
    }

    /// Parse a wire tag; unknown tags yield `None` so callers can default.
    pub fn parse(tag: &str) -> Option<SortOption> {
        SortOption::ALL.iter().copied().find(|s| s.as_str() == tag)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
