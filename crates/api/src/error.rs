//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, OrderError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Domain logic error.
    Domain(DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Domain(err) => domain_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    match &err {
        DomainError::Order(order_err) => match order_err {
            OrderError::NotFound(_) | OrderError::ProductNotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            OrderError::StoreDeactivated
            | OrderError::CustomerDeactivated
            | OrderError::NoProducts
            | OrderError::InvalidDiscountCode
            | OrderError::InvalidQuantity { .. }
            | OrderError::TotalOverflow => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
        },
        DomainError::Repository(_) => {
            tracing::error!(error = %err, "internal server error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

#[cfg(test)]
mod tests {
    use common::{OrderId, ProductId};
    use domain::RepositoryError;

    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_failures_are_unprocessable() {
        for err in [
            OrderError::StoreDeactivated,
            OrderError::CustomerDeactivated,
            OrderError::NoProducts,
            OrderError::InvalidDiscountCode,
            OrderError::TotalOverflow,
        ] {
            assert_eq!(
                status_of(ApiError::from(DomainError::from(err))),
                StatusCode::UNPROCESSABLE_ENTITY
            );
        }
    }

    #[test]
    fn test_missing_entities_are_not_found() {
        let err = DomainError::from(OrderError::NotFound(OrderId::new()));
        assert_eq!(status_of(err.into()), StatusCode::NOT_FOUND);

        let err = DomainError::from(OrderError::ProductNotFound {
            product_id: ProductId::new(),
        });
        assert_eq!(status_of(err.into()), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_failure_is_internal() {
        let err = DomainError::from(RepositoryError::Unavailable("down".to_string()));
        assert_eq!(status_of(err.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request() {
        assert_eq!(
            status_of(ApiError::BadRequest("nope".to_string())),
            StatusCode::BAD_REQUEST
        );
    }
}
