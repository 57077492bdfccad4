//! # Ledger Digest Computation
//!
//! SHA-256 digests over a fixed-order concatenation of transaction fields.
//! This is the only hashing the chain depends on; determinism here is what
//! makes the verifier able to re-derive stored hashes.

pub mod digest;

pub use digest::{sha256_hex, transaction_digest, GENESIS_HASH};
