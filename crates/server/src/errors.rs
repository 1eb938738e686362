use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body returned by every handler: `{ "status", "title", "detail" }`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(serialize_with = "as_u16")]
    pub status: StatusCode,
    pub title: String,
    pub detail: String,
}

fn as_u16<S: serde::Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(status.as_u16())
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { status, title: title.into(), detail: detail.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            e if e.is_not_found() => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::NameConflict(_) | ServiceError::AlreadyVoted { .. } => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::Validation(_) | ServiceError::Model(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        if status.is_server_error() {
            error!(code = e.code(), error = %e, "request failed");
        }
        Self::new(status, title, e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("mail transport setup failed: {0}")]
    Mailer(#[from] service::notify::NotifyError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn service_errors_map_to_status_codes() {
        let id = Uuid::new_v4();
        let cases = [
            (ServiceError::IssueNotFound(id), StatusCode::NOT_FOUND),
            (ServiceError::AddressNotFound(id), StatusCode::NOT_FOUND),
            (ServiceError::CommentNotFound(id), StatusCode::NOT_FOUND),
            (ServiceError::NameConflict("x".into()), StatusCode::CONFLICT),
            (ServiceError::AlreadyVoted { comment_id: id, employee_id: id }, StatusCode::CONFLICT),
            (ServiceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn body_carries_numeric_status() {
        let e = JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", "Issue with 1 id not found");
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["status"], 404);
        assert_eq!(v["detail"], "Issue with 1 id not found");
    }
}
