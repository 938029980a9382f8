//! Error types for marketplace controllers.

use petadopt_model::{AdoptionStage, PetId};
use thiserror::Error;

/// Failure of a pet repository operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Two seed records share an identifier.
    #[error("duplicate pet id: {id}")]
    DuplicateId { id: PetId },

    #[error("pet not found: {id}")]
    NotFound { id: PetId },

    /// A replacement record carries a different identifier than the slot.
    #[error("replacement for {expected} has id {found}")]
    IdMismatch { expected: PetId, found: PetId },

    #[error("adoption for {id} cannot start from stage {stage:?}")]
    AdoptionNotReady { id: PetId, stage: AdoptionStage },
}

/// Failure reported by the marketplace backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("{reason}")]
    Rejected { reason: String },

    /// The worker ended without sending a result.
    #[error("backend request was dropped before completing")]
    Disconnected,
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
pub type BackendResult<T> = std::result::Result<T, BackendError>;
