use headshakers_types::{FeaturedFilter, FieldFilter, FilterCriteria, PageSize, PageState, SortOption};
use std::collections::BTreeMap;

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_CONDITION: &str = "condition";
pub const PARAM_FEATURED: &str = "featured";
pub const PARAM_SORT: &str = "sortBy";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PAGE_SIZE: &str = "pageSize";

/// The slice of controller state that is mirrored into the URL query
/// string for shareable, bookmarkable, back-button-consistent views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQueryState {
    pub criteria: FilterCriteria,
    pub sort: SortOption,
    pub page: PageState,
}

/// Encode state into a flat parameter map, omitting every default so the
/// default state produces an empty map (encode→decode→encode idempotence).
pub fn encode(state: &ListQueryState) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    if !state.criteria.search.is_empty() {
        params.insert(PARAM_SEARCH.to_string(), state.criteria.search.clone());
    }
    if let FieldFilter::Only(category) = &state.criteria.category {
        params.insert(PARAM_CATEGORY.to_string(), category.clone());
    }
    if let FieldFilter::Only(condition) = &state.criteria.condition {
        params.insert(PARAM_CONDITION.to_string(), condition.clone());
    }
    if state.criteria.featured != FeaturedFilter::All {
        params.insert(
            PARAM_FEATURED.to_string(),
            state.criteria.featured.as_str().to_string(),
        );
    }
    if state.sort != SortOption::default() {
        params.insert(PARAM_SORT.to_string(), state.sort.as_str().to_string());
    }
    if state.page.current_page != 1 {
        params.insert(PARAM_PAGE.to_string(), state.page.current_page.to_string());
    }
    if state.page.page_size != PageSize::default() {
        params.insert(
            PARAM_PAGE_SIZE.to_string(),
            state.page.page_size.to_string(),
        );
    }

    params
}

/// Decode a parameter map into state.
///
/// Malformed input never fails: unknown sort tags, unrecognized featured
/// values, non-numeric or zero pages, and off-menu page sizes all fall
/// back to their defaults silently, per the stale-URL degradation rule.
pub fn decode(params: &BTreeMap<String, String>) -> ListQueryState {
    let mut state = ListQueryState::default();

    if let Some(search) = params.get(PARAM_SEARCH) {
        state.criteria.search = search.clone();
    }
    if let Some(category) = params.get(PARAM_CATEGORY) {
        state.criteria.category = FieldFilter::from_value(category);
    }
    if let Some(condition) = params.get(PARAM_CONDITION) {
        state.criteria.condition = FieldFilter::from_value(condition);
    }
    if let Some(featured) = params.get(PARAM_FEATURED) {
        state.criteria.featured = FeaturedFilter::parse(featured).unwrap_or_default();
    }
    if let Some(sort) = params.get(PARAM_SORT) {
        state.sort = SortOption::parse(sort).unwrap_or_default();
    }
    if let Some(page) = params.get(PARAM_PAGE) {
        state.page.current_page = page.parse::<usize>().ok().filter(|&n| n >= 1).unwrap_or(1);
    }
    if let Some(size) = params.get(PARAM_PAGE_SIZE) {
        state.page.page_size = size
            .parse::<usize>()
            .ok()
            .and_then(PageSize::from_count)
            .unwrap_or_default();
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_encodes_to_empty_map() {
        assert!(encode(&ListQueryState::default()).is_empty());
    }

    #[test]
    fn test_decode_of_empty_map_is_default() {
        assert_eq!(decode(&BTreeMap::new()), ListQueryState::default());
    }

    #[test]
    fn test_non_default_state_round_trips() {
        let state = ListQueryState {
            criteria: FilterCriteria {
                category: FieldFilter::only("Sports"),
                condition: FieldFilter::only("mint"),
                featured: FeaturedFilter::Featured,
                search: "moose".to_string(),
            },
            sort: SortOption::Newest,
            page: PageState {
                current_page: 3,
                page_size: PageSize::TwentyFour,
            },
        };

        let params = encode(&state);
        assert_eq!(params.get("sortBy").map(String::as_str), Some("newest"));
        assert_eq!(params.get("page").map(String::as_str), Some("3"));
        assert_eq!(params.get("pageSize").map(String::as_str), Some("24"));

        assert_eq!(decode(&params), state);
    }

    #[test]
    fn test_malformed_params_degrade_to_defaults() {
        let params: BTreeMap<String, String> = [
            ("sortBy", "alphabetical"),
            ("featured", "sometimes"),
            ("page", "-4"),
            ("pageSize", "13"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let state = decode(&params);
        assert_eq!(state.sort, SortOption::default());
        assert_eq!(state.criteria.featured, FeaturedFilter::All);
        assert_eq!(state.page.current_page, 1);
        assert_eq!(state.page.page_size, PageSize::default());
    }

    #[test]
    fn test_all_literal_decodes_to_unrestricted() {
        let params: BTreeMap<String, String> = [("category", "all"), ("condition", "all")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let state = decode(&params);
        assert!(state.criteria.category.is_all());
        assert!(state.criteria.condition.is_all());
    }
}
