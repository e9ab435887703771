use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    cors,
    handlers::{self, categories, inventory},
    AppState,
};

/// The full application: routes, tracing and CORS.
///
/// CORS sits inside the trace layer so short-circuited `OPTIONS` requests
/// are still traced. The API paths register `HEAD` explicitly, otherwise axum
/// would answer it with the GET handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )

        // ── Categories ──────────────────────────────────────────────────────
        .route(
            "/api/categories",
            get(categories::list_categories)
                .post(categories::create_category)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )

        // ── Inventory ───────────────────────────────────────────────────────
        .route(
            "/api/inventory",
            get(inventory::list_inventory)
                .post(inventory::create_inventory_item)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/inventory/export/csv",
            get(inventory::export_csv).fallback(handlers::method_not_allowed),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(cors::allow_all_origins)),
        )
        .with_state(state)
}
