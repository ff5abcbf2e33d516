use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single bobblehead as handed over by the data-fetch layer.
///
/// Items are immutable snapshots: the list engine only reads them and
/// receives a fresh collection whenever the backing query re-runs.
/// Field names follow the camelCase wire format of the collection export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque, stable identifier.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    /// Estimated value; unknown for unappraised items.
    #[serde(default)]
    pub total_value: Option<f64>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub comment_count: u64,
}
