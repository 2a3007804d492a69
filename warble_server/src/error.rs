use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use warble_core::Error as WarbleError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug)]
pub struct ServerError(anyhow::Error);

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        let err = &self.0;
        for cause in err.chain() {
            if let Some(err) = cause.downcast_ref::<WarbleError>() {
                match err {
                    WarbleError::ObjectNotFound(_) => return StatusCode::NOT_FOUND,
                    WarbleError::ObjectAlreadyExists(_) => return StatusCode::CONFLICT,
                    WarbleError::MalformedInput(_) => return StatusCode::BAD_REQUEST,
                    _ => return StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Turn a failed JSON body extraction into a bad request.
pub fn malformed(rejection: JsonRejection) -> ServerError {
    WarbleError::MalformedInput(rejection.body_text()).into()
}

/// Same for a query string that doesn't fit the expected parameters.
pub fn malformed_query(rejection: QueryRejection) -> ServerError {
    WarbleError::MalformedInput(rejection.body_text()).into()
}
