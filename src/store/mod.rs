use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::*;
use crate::seed;

/// Both collections, keyed by id and iterated in insertion order.
#[derive(Debug, Default)]
struct Collections {
    categories: IndexMap<String, Category>,
    items: IndexMap<String, InventoryItem>,
}

/// In-memory record store shared by all handlers. Cheap to clone.
///
/// One lock covers both collections, so a category read and an inventory write
/// never overlap. The lock is held only while the collection is copied or
/// appended to; callers serialize the returned snapshots after release.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<Mutex<Collections>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// A fresh store holding the built-in categories and no inventory.
    pub fn new() -> Self {
        let categories = seed::default_categories()
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        Self {
            inner: Arc::new(Mutex::new(Collections {
                categories,
                items: IndexMap::new(),
            })),
        }
    }

    // ── Categories ────────────────────────────────────────────────────────────

    pub async fn list_categories(&self) -> Vec<Category> {
        self.inner.lock().await.categories.values().cloned().collect()
    }

    pub async fn create_category(&self, payload: CreateCategory) -> Category {
        let mut guard = self.inner.lock().await;
        let id = fresh_id(&guard.categories);
        let category = payload.into_category(id.clone());
        guard.categories.insert(id, category.clone());
        category
    }

    // ── Inventory ─────────────────────────────────────────────────────────────

    pub async fn list_inventory(&self) -> Vec<InventoryItem> {
        self.inner.lock().await.items.values().cloned().collect()
    }

    pub async fn create_inventory_item(&self, payload: CreateInventoryItem) -> InventoryItem {
        let mut guard = self.inner.lock().await;
        let id = fresh_id(&guard.items);
        let item = payload.into_item(id.clone(), Utc::now());
        guard.items.insert(id, item.clone());
        item
    }

    /// Both collections copied under a single acquisition, so the pair is
    /// mutually consistent.
    pub async fn snapshot(&self) -> (Vec<Category>, Vec<InventoryItem>) {
        let guard = self.inner.lock().await;
        (
            guard.categories.values().cloned().collect(),
            guard.items.values().cloned().collect(),
        )
    }
}

/// A v4 UUID not already used as a key in `taken`.
fn fresh_id<V>(taken: &IndexMap<String, V>) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken.contains_key(&id) {
            return id;
        }
    }
}
