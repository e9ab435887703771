use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;

/// A counted record of equipment. `category_id` is a plain reference and is
/// never checked against the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub category_id: String,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /api/inventory`. Client-sent `id` and `created_at` are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateInventoryItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_id: String,
    /// Negative counts are accepted as-is.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
    pub notes: Option<String>,
}

impl CreateInventoryItem {
    pub fn into_item(self, id: String, created_at: DateTime<Utc>) -> InventoryItem {
        InventoryItem {
            id,
            category_id: self.category_id,
            count: self.count,
            notes: self.notes.filter(|n| !n.is_empty()),
            created_at,
        }
    }
}
