//! # Error Taxonomy
//!
//! Domain errors are deterministic outcomes of ledger rules and carry no
//! retry semantics. Storage failures stay in their own type and pass through
//! `LedgerError::Storage` untouched; they are never mapped onto the domain
//! variants.

use crate::entities::{ConfirmationStatus, ParticipantId, ProductId, TransactionId};
use thiserror::Error;

/// Storage-layer failure (I/O, connectivity). Opaque to the domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage failure: {0}")]
pub struct StoreError(pub String);

/// Domain error taxonomy for ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No product exists for a submission that claims to continue a chain.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Transaction id does not resolve to a stored transaction.
    #[error("transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Invalid state transition: the transaction already left Pending.
    #[error("transaction {id} is already {status}")]
    Conflict {
        id: TransactionId,
        status: ConfirmationStatus,
    },

    /// Chain verification failed at confirmation time.
    #[error("chain integrity compromised for product {0}")]
    IntegrityViolation(ProductId),

    /// Actor lacks the approval or role the operation requires.
    #[error("actor {0} is not authorized for this operation")]
    Unauthorized(ParticipantId),

    /// Malformed submission input.
    #[error("invalid submission: {0}")]
    Validation(String),

    /// Storage failure passthrough.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
