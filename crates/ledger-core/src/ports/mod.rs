//! Ports (hexagonal boundaries) for the ledger core.

pub mod inbound;
pub mod outbound;

pub use inbound::{ProductChain, ProvenanceApi};
pub use outbound::{ConfirmationUpdate, LedgerStore, TimeSource};
