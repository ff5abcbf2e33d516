use crate::Item;
use std::collections::BTreeSet;

/// The dropdown option sets for the discrete filter dimensions.
///
/// Derived from the collection itself rather than hardcoded: categories and
/// conditions vary per data set and may be empty. The engine re-derives the
/// vocabulary whenever it receives a fresh collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    pub categories: Vec<String>,
    pub conditions: Vec<String>,
}

impl Vocabulary {
    /// Collect the distinct categories and conditions present in a
    /// collection, sorted for stable dropdown ordering.
    pub fn from_items(items: &[Item]) -> Self {
        let categories: BTreeSet<&str> = items
            .iter()
            .filter_map(|item| item.category.as_deref())
            .collect();
        let conditions: BTreeSet<&str> = items
            .iter()
            .filter_map(|item| item.condition.as_deref())
            .collect();

        Self {
            categories: categories.into_iter().map(str::to_string).collect(),
            conditions: conditions.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.conditions.is_empty()
    }
}
