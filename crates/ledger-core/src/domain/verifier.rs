//! Chain verification: replay the confirmed sequence and check linkage.
//!
//! Pure function over an already-loaded slice; the service feeds it the
//! Confirmed transactions for one product in creation-time ascending order.
//! Read-only and idempotent, safe to run concurrently with anything.

use ledger_crypto::{transaction_digest, GENESIS_HASH};
use ledger_types::Transaction;

/// Outcome of a chain walk.
///
/// The walk fails fast: `index` points at the first offending element and
/// nothing past it is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainVerdict {
    Valid,
    /// `previous_hash` did not match the expected predecessor digest.
    BrokenLink { index: usize },
    /// Recomputed digest did not match the stored `current_hash`.
    DigestMismatch { index: usize },
}

impl ChainVerdict {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Walks the confirmed ascending sequence for one product.
///
/// An empty chain is vacuously valid. Each element must link to its
/// predecessor (genesis constant for element 0) and its stored
/// `current_hash` must equal the digest recomputed from its own stored,
/// untrimmed fields.
pub fn verify_chain(chain: &[Transaction]) -> ChainVerdict {
    let mut expected_prev = GENESIS_HASH;

    for (index, tx) in chain.iter().enumerate() {
        if tx.previous_hash != expected_prev {
            return ChainVerdict::BrokenLink { index };
        }

        let recomputed = transaction_digest(
            &tx.product_id,
            &tx.participant_id,
            &tx.status,
            tx.created_at,
            &tx.previous_hash,
            &tx.location,
            &tx.description,
        );
        if recomputed != tx.current_hash {
            return ChainVerdict::DigestMismatch { index };
        }

        expected_prev = &tx.current_hash;
    }

    ChainVerdict::Valid
}
