//! Domain error types.

use thiserror::Error;

use crate::order::OrderError;

/// Errors raised by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing storage could not serve the request.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A business rule rejected the request.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// A repository call failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Returns the business rule violation, if that is what this error is.
    pub fn as_order_error(&self) -> Option<&OrderError> {
        match self {
            DomainError::Order(err) => Some(err),
            DomainError::Repository(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_errors_surface_their_own_message() {
        let err = DomainError::from(OrderError::NoProducts);
        assert_eq!(err.to_string(), "AtLeast one product is required.");
        assert_eq!(err.as_order_error(), Some(&OrderError::NoProducts));
    }

    #[test]
    fn repository_errors_are_prefixed() {
        let err = DomainError::from(RepositoryError::Unavailable("disk full".to_string()));
        assert_eq!(
            err.to_string(),
            "Repository error: Storage unavailable: disk full"
        );
        assert!(err.as_order_error().is_none());
    }
}
