use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;

/// A named classification bucket for inventory items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /api/categories`. Any `id` sent by the client is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
}

impl CreateCategory {
    /// Builds the stored record. Empty descriptions are dropped so they never
    /// reach the wire.
    pub fn into_category(self, id: String) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description.filter(|d| !d.is_empty()),
        }
    }
}
