//! # Core Ledger Entities
//!
//! Records tracked by the ledger and the identity data the core consumes.
//!
//! Hashes are stored as lowercase hexadecimal strings (64 characters for a
//! SHA-256 digest). Timestamps are 100-nanosecond ticks since
//! 0001-01-01T00:00:00Z, matching the integer representation persisted by
//! the original system — the digest input depends on it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Externally supplied unique product identifier.
pub type ProductId = Uuid;

/// Identifier of a custody transaction.
pub type TransactionId = Uuid;

/// Identifier of a submitting participant.
pub type ParticipantId = Uuid;

/// Timestamp in 100-nanosecond ticks since 0001-01-01T00:00:00Z.
pub type Ticks = u64;

/// A tracked product.
///
/// Not versioned: every admitted candidate transaction overwrites
/// `description`/`status` with its own values, confirmed or not. A product
/// exists iff at least one transaction has ever targeted it; it is never
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub description: String,
    pub status: String,
}

/// Admission state of a transaction.
///
/// Transitions are monotonic:
///
/// ```text
/// [PENDING] ──confirm──→ [CONFIRMED]   (terminal)
///     │
///     └────cancel───→ [CANCELLED]      (terminal)
/// ```
///
/// Only Confirmed transactions anchor the chain; Pending and Cancelled ones
/// are excluded from chain ordering and previous-hash resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfirmationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ConfirmationStatus {
    /// Returns true if no further transition is possible.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for ConfirmationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// One custody event for a product.
///
/// All fields except `confirmation` are fixed at creation. `current_hash` is
/// the digest of this transaction's own field tuple and is never recomputed;
/// `previous_hash` is the chain head's `current_hash` at submission time, or
/// the genesis constant for a product with no confirmed history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub product_id: ProductId,
    pub participant_id: ParticipantId,
    pub status: String,
    pub description: String,
    pub location: String,
    pub created_at: Ticks,
    pub previous_hash: String,
    pub current_hash: String,
    pub confirmation: ConfirmationStatus,
}

impl Transaction {
    /// Returns true if this transaction is part of the trusted chain.
    pub fn is_confirmed(&self) -> bool {
        self.confirmation == ConfirmationStatus::Confirmed
    }
}

/// Role assigned by the identity collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Participant,
    Admin,
}

/// Authenticated caller identity, supplied per request by the identity
/// collaborator. The core consumes nothing else about the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ParticipantId,
    pub role: Role,
    pub approved: bool,
}

impl Actor {
    /// Participant that an admin has approved for submissions.
    pub fn is_approved_participant(&self) -> bool {
        self.role == Role::Participant && self.approved
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
