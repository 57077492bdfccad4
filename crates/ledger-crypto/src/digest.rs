//! Transaction digest over the fixed-order field concatenation.
//!
//! The concatenation order is load-bearing: product id, participant id,
//! status, creation ticks, previous hash, location, description. Inputs go
//! in exactly as stored — no trimming, no normalization. Both the write path
//! and the verifier build the same string, so the two sides stay consistent.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Previous-hash sentinel for a product's first confirmed transaction.
///
/// Preserved verbatim from existing stored data: 64 ASCII zeros.
pub const GENESIS_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// SHA-256 over the UTF-8 bytes of `data`, rendered as lowercase hex.
///
/// Pure and deterministic; always 64 characters, never truncated or padded.
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

/// Digest of one transaction's own field tuple.
///
/// Uuids render lowercase hyphenated, ticks as a decimal integer — the same
/// textual forms the original system concatenated at write time.
#[allow(clippy::too_many_arguments)]
pub fn transaction_digest(
    product_id: &Uuid,
    participant_id: &Uuid,
    status: &str,
    created_at_ticks: u64,
    previous_hash: &str,
    location: &str,
    description: &str,
) -> String {
    let block_data = format!(
        "{product_id}{participant_id}{status}{created_at_ticks}{previous_hash}{location}{description}"
    );
    sha256_hex(&block_data)
}
