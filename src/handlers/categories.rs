use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    error::AppResult,
    models::{Category, CreateCategory},
    AppState,
};

use super::decode;

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let categories = state.store.list_categories().await;
    info!(count = categories.len(), "Listed categories");
    Json(categories)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_category(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Category>)> {
    let payload: CreateCategory = decode(&body)?;
    let category = state.store.create_category(payload).await;

    info!(id = %category.id, name = %category.name, "Created category");

    Ok((StatusCode::CREATED, Json(category)))
}
