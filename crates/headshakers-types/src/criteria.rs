use std::fmt;

/// A discrete filter dimension: unrestricted, or an exact value match.
///
/// The wire representation of `All` is the literal string `all`;
/// `from_value` maps that literal back so `Only("all")` never comes off
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter {
    #[default]
    All,
    Only(String),
}

impl FieldFilter {
    pub fn only(value: impl Into<String>) -> Self {
        FieldFilter::Only(value.into())
    }

    /// Build a filter from a wire value, mapping the `all` literal back to `All`.
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            FieldFilter::All
        } else {
            FieldFilter::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FieldFilter::All)
    }

    /// Whether an item's (optional) field value passes this filter.
    ///
    /// An absent field never matches a specific value; comparison is
    /// case-sensitive and exact.
    pub fn allows(&self, actual: Option<&str>) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(expected) => actual == Some(expected.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldFilter::All => "all",
            FieldFilter::Only(value) => value,
        }
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three-way featured filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeaturedFilter {
    #[default]
    All,
    Featured,
    NotFeatured,
}

impl FeaturedFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeaturedFilter::All => "all",
            FeaturedFilter::Featured => "featured",
            FeaturedFilter::NotFeatured => "not-featured",
        }
    }

    /// Parse a wire tag; unknown tags yield `None` so callers can default.
    pub fn parse(tag: &str) -> Option<FeaturedFilter> {
        match tag {
            "all" => Some(FeaturedFilter::All),
            "featured" => Some(FeaturedFilter::Featured),
            "not-featured" => Some(FeaturedFilter::NotFeatured),
            _ => None,
        }
    }

    pub fn allows(&self, is_featured: bool) -> bool {
        match self {
            FeaturedFilter::All => true,
            FeaturedFilter::Featured => is_featured,
            FeaturedFilter::NotFeatured => !is_featured,
        }
    }
}

impl fmt::Display for FeaturedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The active set of constraints narrowing the visible item set.
///
/// Every field defaults to "no restriction"; a criteria value outside the
/// collection's vocabulary simply matches nothing, it is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: FieldFilter,
    pub condition: FieldFilter,
    pub featured: FeaturedFilter,
    /// Free text, matched case-insensitively against name and description.
    pub search: String,
}

impl FilterCriteria {
    /// True if any field deviates from its default.
    ///
    /// Whitespace-only search text counts as inactive, mirroring the
    /// predicate which treats it as "match everything".
    pub fn is_active(&self) -> bool {
        !self.category.is_all()
            || !self.condition.is_all()
            || self.featured != FeaturedFilter::All
            || !self.search.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_is_inactive() {
        assert!(!FilterCriteria::default().is_active());
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let criteria = FilterCriteria {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(!criteria.is_active());
    }

    #[test]
    fn test_any_deviation_is_active() {
        let criteria = FilterCriteria {
            featured: FeaturedFilter::Featured,
            ..Default::default()
        };
        assert!(criteria.is_active());
    }

    #[test]
    fn test_field_filter_from_value_maps_all_literal() {
        assert_eq!(FieldFilter::from_value("all"), FieldFilter::All);
        assert_eq!(
            FieldFilter::from_value("Sports"),
            FieldFilter::Only("Sports".to_string())
        );
    }

    #[test]
    fn test_field_filter_absent_value_never_matches_specific() {
        let filter = FieldFilter::Only("Sports".to_string());
        assert!(!filter.allows(None));
        assert!(filter.allows(Some("Sports")));
        assert!(!filter.allows(Some("sports")));
    }

    #[test]
    fn test_featured_parse_rejects_unknown_tags() {
        assert_eq!(FeaturedFilter::parse("featured"), Some(FeaturedFilter::Featured));
        assert_eq!(FeaturedFilter::parse("maybe"), None);
    }
}
