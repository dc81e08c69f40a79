//! API error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::observability::Logger;
use crate::service::ServiceError;

/// An error ready to be sent to a client: a status code and a short,
/// generic message. Internal detail goes to the structured log only.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

/// Error response body: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::DealerNotFound => StatusCode::NOT_FOUND,
            ServiceError::Store { operation, source } => {
                Logger::error(
                    "STORE_OPERATION_FAILED",
                    &[("operation", operation), ("reason", &source.to_string())],
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(ServiceError::DealerNotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Dealer not found");
    }

    #[test]
    fn test_store_failure_maps_to_500_with_generic_message() {
        let err = ApiError::from(ServiceError::Store {
            operation: "Error fetching documents",
            source: StoreError::Poisoned("reviews".to_string()),
        });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Error fetching documents");
    }
}
