pub mod categories;
pub mod inventory;

use axum::{http::StatusCode, Json};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{AppError, AppResult};

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "inventory-api" })))
}

/// Fallback for known paths hit with a verb they do not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Decode a JSON request body regardless of its `Content-Type` header.
///
/// Only the first JSON value is read and anything after it is ignored. A
/// top-level `null` yields `T::default()`. Syntax errors and shape mismatches
/// both surface as 400, unlike axum's `Json` extractor which answers 415/422.
fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> AppResult<T> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<T>>();
    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(AppError::InvalidBody("empty body".to_string())),
    }
}
