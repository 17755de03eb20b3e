use accessible_model::CollectionKind;
use accessible_types::ValueKind;
use thiserror::Error;

/// Errors raised by collection strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("expected {expected} argument(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// The container handed to a strategy is not of the strategy's kind.
    #[error("expected a {expected:?} container, found {actual}")]
    ContainerMismatch {
        expected: CollectionKind,
        actual: ValueKind,
    },
}

/// Result type for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
