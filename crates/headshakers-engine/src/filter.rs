use headshakers_types::{FilterCriteria, Item};

/// Whether an item passes every active filter dimension.
///
/// Category, condition, featured, and search are ANDed. The predicate is
/// total: no criteria combination can panic, and an item missing an
/// optional field simply fails any specific (non-"all") filter on it.
pub fn matches(item: &Item, criteria: &FilterCriteria) -> bool {
    criteria.category.allows(item.category.as_deref())
        && criteria.condition.allows(item.condition.as_deref())
        && criteria.featured.allows(item.is_featured)
        && matches_search(item, &criteria.search)
}

/// Case-insensitive substring match against name and, when present,
/// description. Whitespace-only search text matches everything.
fn matches_search(item: &Item, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    if item.name.to_lowercase().contains(&needle) {
        return true;
    }

    item.description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(&needle))
}
