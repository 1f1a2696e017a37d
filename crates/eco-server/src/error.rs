use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use eco_store::StoreError;
use eco_types::TypeError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    BadRequest(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl From<TypeError> for ServerError {
    fn from(e: TypeError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(e: JsonRejection) -> Self {
        Self::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(e: QueryRejection) -> Self {
        Self::BadRequest(e.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::NotFound(_) | Self::Store(StoreError::PostNotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            _ => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_types::PostId;

    #[test]
    fn status_mapping() {
        let cases = [
            (ServerError::NotFound("post 9".into()), StatusCode::NOT_FOUND),
            (
                ServerError::Store(StoreError::PostNotFound(PostId::from("9"))),
                StatusCode::NOT_FOUND,
            ),
            (
                ServerError::from(TypeError::EmptyField("title")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServerError::Store(StoreError::LockPoisoned("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn type_error_message_is_kept() {
        let err = ServerError::from(TypeError::EmptyField("content"));
        assert_eq!(err.to_string(), "invalid input: content must not be empty");
    }
}
