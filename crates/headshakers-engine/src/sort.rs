use headshakers_types::{Item, SortOption};
use std::cmp::Ordering;

/// Total order over items for a given sort option.
///
/// Every branch breaks ties by `id` ascending so the order is
/// deterministic regardless of input order. Missing numeric fields compare
/// as zero rather than sorting specially.
pub fn compare(a: &Item, b: &Item, sort: SortOption) -> Ordering {
    let ordering = match sort {
        SortOption::NameAsc => compare_names(a, b),
        SortOption::NameDesc => compare_names(b, a),
        SortOption::CountAsc => a.like_count.cmp(&b.like_count),
        SortOption::CountDesc => b.like_count.cmp(&a.like_count),
        SortOption::ValueAsc => compare_values(a, b),
        SortOption::ValueDesc => compare_values(b, a),
        SortOption::LikesDesc => b.like_count.cmp(&a.like_count),
        SortOption::ViewsDesc => b.view_count.cmp(&a.view_count),
        SortOption::CommentsDesc => b.comment_count.cmp(&a.comment_count),
        SortOption::Newest => b.created_at.cmp(&a.created_at),
        SortOption::Oldest => a.created_at.cmp(&b.created_at),
    };

    ordering.then_with(|| a.id.cmp(&b.id))
}

// Case-insensitive stand-in for locale collation.
fn compare_names(a: &Item, b: &Item) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn compare_values(a: &Item, b: &Item) -> Ordering {
    let left = a.total_value.unwrap_or(0.0);
    let right = b.total_value.unwrap_or(0.0);
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}
