use headshakers_types::{Item, Vocabulary};
use serde::Serialize;

/// Dashboard roll-up over an entire collection, independent of any
/// filter/sort/page state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_items: usize,
    /// Sum of the known item values; unappraised items contribute nothing.
    pub estimated_value: f64,
    pub featured_count: usize,
    pub category_count: usize,
}

impl CollectionStats {
    pub fn from_items(items: &[Item]) -> Self {
        let mut estimated_value = 0.0;
        let mut featured_count = 0;

        for item in items {
            if let Some(value) = item.total_value {
                estimated_value += value;
            }
            if item.is_featured {
                featured_count += 1;
            }
        }

        Self {
            total_items: items.len(),
            estimated_value,
            featured_count,
            category_count: Vocabulary::from_items(items).categories.len(),
        }
    }
}
