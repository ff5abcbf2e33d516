//! Fixtures for sample collection data.
//!
//! Provides:
//! - `ItemBuilder` for assembling items field by field with stable defaults
//! - canned collections of a given size for pagination tests
//! - helpers to write a collection to disk as the JSON the CLI consumes

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use headshakers_types::Item;
use std::path::Path;
use uuid::Uuid;

/// Fixed reference time so fixtures are deterministic across runs.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

/// Builder over `Item` with neutral defaults: no description, category,
/// condition, or value; zero counters; created at `base_time()`.
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            item: Item {
                id: id.to_string(),
                name: format!("Item {id}"),
                description: None,
                category: None,
                condition: None,
                is_featured: false,
                created_at: base_time(),
                total_value: None,
                like_count: 0,
                view_count: 0,
                comment_count: 0,
            },
        }
    }

    /// Builder with a random unique id, for tests that do not care.
    pub fn random() -> Self {
        Self::new(&Uuid::new_v4().to_string())
    }

    pub fn name(mut self, name: &str) -> Self {
        self.item.name = name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.item.description = Some(description.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.item.category = Some(category.to_string());
        self
    }

    pub fn condition(mut self, condition: &str) -> Self {
        self.item.condition = Some(condition.to_string());
        self
    }

    pub fn featured(mut self) -> Self {
        self.item.is_featured = true;
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.item.total_value = Some(value);
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.item.like_count = likes;
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.item.view_count = views;
        self
    }

    pub fn comments(mut self, comments: u64) -> Self {
        self.item.comment_count = comments;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.item.created_at = created_at;
        self
    }

    /// Acquisition `days` before the fixture base time.
    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.item.created_at = base_time() - Duration::days(days);
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

/// A collection of `count` items with ids `bh_001`.. and rotating
/// categories/conditions, newest first by construction order.
pub fn collection(count: usize) -> Vec<Item> {
    const CATEGORIES: [&str; 3] = ["Sports", "Movies", "Music"];
    const CONDITIONS: [&str; 2] = ["mint", "good"];

    (0..count)
        .map(|i| {
            ItemBuilder::new(&format!("bh_{:03}", i + 1))
                .name(&format!("Bobblehead {:03}", i + 1))
                .category(CATEGORIES[i % CATEGORIES.len()])
                .condition(CONDITIONS[i % CONDITIONS.len()])
                .created_days_ago(i as i64)
                .build()
        })
        .collect()
}

/// Write a collection to `path` as the JSON array the CLI consumes.
pub fn write_collection(path: &Path, items: &[Item]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}
