use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Client-facing failures. Rendered as plain text, never as a JSON payload.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body was not JSON or did not match the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            tracing::error!(error = %err, "Internal error");
        }
        // String bodies go out as text/plain; charset=utf-8
        (self.status(), self.to_string()).into_response()
    }
}
