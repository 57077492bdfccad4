//! Pure domain logic: no I/O, no clocks, no storage.

pub mod config;
pub mod submission;
pub mod verifier;

pub use config::LedgerConfig;
pub use submission::{build_candidate, SubmitRequest};
pub use verifier::{verify_chain, ChainVerdict};
