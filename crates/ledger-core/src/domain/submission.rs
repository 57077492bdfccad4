//! Submission validation and candidate transaction construction.
//!
//! Validation inspects trimmed copies of the free-text fields; the values
//! that get stored and digested stay untrimmed. Trimming the digest input
//! would be a versioned format change for every already-stored hash.

use ledger_crypto::transaction_digest;
use ledger_types::{
    ConfirmationStatus, LedgerError, ParticipantId, ProductId, Ticks, Transaction, TransactionId,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::LedgerConfig;

/// One custody event as submitted by a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub product_id: ProductId,
    pub status: String,
    pub description: String,
    pub location: String,
    /// True when the submitter declares this the product's first event,
    /// authorizing lazy product creation.
    pub first_transaction: bool,
}

impl SubmitRequest {
    /// Rejects blank or oversized free-text fields.
    pub fn validate(&self, config: &LedgerConfig) -> Result<(), LedgerError> {
        check_field("status", &self.status, config.max_status_len)?;
        check_field("description", &self.description, config.max_description_len)?;
        check_field("location", &self.location, config.max_location_len)?;
        Ok(())
    }
}

fn check_field(name: &str, value: &str, max_len: usize) -> Result<(), LedgerError> {
    if value.trim().is_empty() {
        return Err(LedgerError::Validation(format!("{name} must not be blank")));
    }
    if value.len() > max_len {
        return Err(LedgerError::Validation(format!(
            "{name} exceeds {max_len} bytes"
        )));
    }
    Ok(())
}

/// Builds the Pending candidate transaction for a submission.
///
/// `previous_hash` is the resolved chain head digest (or the genesis
/// constant); the caller is responsible for resolving it under the
/// per-product lock. `current_hash` is computed here, once, over the
/// candidate's own untrimmed fields — the only place a transaction digest
/// is ever assigned.
pub fn build_candidate(
    request: &SubmitRequest,
    participant_id: ParticipantId,
    previous_hash: String,
    created_at: Ticks,
) -> Transaction {
    let id: TransactionId = Uuid::new_v4();
    let current_hash = transaction_digest(
        &request.product_id,
        &participant_id,
        &request.status,
        created_at,
        &previous_hash,
        &request.location,
        &request.description,
    );

    Transaction {
        id,
        product_id: request.product_id,
        participant_id,
        status: request.status.clone(),
        description: request.description.clone(),
        location: request.location.clone(),
        created_at,
        previous_hash,
        current_hash,
        confirmation: ConfirmationStatus::Pending,
    }
}
