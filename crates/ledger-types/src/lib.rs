//! # Shared Ledger Types
//!
//! Entities and the error taxonomy shared by every crate in the workspace.
//!
//! ## Clusters
//!
//! - **Records**: `Product`, `Transaction`, `ConfirmationStatus`
//! - **Identity**: `Actor`, `Role` (output of the identity collaborator)
//! - **Errors**: `LedgerError` (domain outcomes), `StoreError` (storage layer)

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
