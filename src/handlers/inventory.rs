use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    export,
    models::{CreateInventoryItem, InventoryItem},
    AppState,
};

use super::decode;

// ── List ──────────────────────────────────────────────────────────────────────

/// An empty inventory is sent as `[]`, never `null`.
pub async fn list_inventory(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    let items = state.store.list_inventory().await;
    info!(count = items.len(), "Listed inventory");
    Json(items)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_inventory_item(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let payload: CreateInventoryItem = decode(&body)?;
    let item = state.store.create_inventory_item(payload).await;

    info!(
        id = %item.id,
        category_id = %item.category_id,
        count = item.count,
        "Created inventory item"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

// ── CSV export ────────────────────────────────────────────────────────────────

pub async fn export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let (categories, items) = state.store.snapshot().await;
    let csv = export::inventory_csv(&categories, &items)?;

    info!(rows = items.len(), "Exported inventory CSV");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"inventory.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
