//! # Inbound Port - ProvenanceApi
//!
//! The transport-agnostic operation surface of the ledger core. An HTTP
//! layer, CLI, or test harness drives the core exclusively through this
//! trait; the `Actor` argument is the identity collaborator's output.
//!
//! | Method | Required caller |
//! |--------|-----------------|
//! | `submit`, `list_mine` | approved Participant |
//! | `confirm`, `cancel`, `list_pending` | Admin |
//! | `get_chain` | none (read path) |

use async_trait::async_trait;
use ledger_types::{Actor, LedgerError, ProductId, Transaction, TransactionId};
use serde::{Deserialize, Serialize};

use crate::domain::SubmitRequest;

/// Confirmed chain for one product plus its verification verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductChain {
    /// Confirmed transactions, creation time ascending.
    pub transactions: Vec<Transaction>,
    /// Result of replaying the chain through the verifier.
    pub chain_valid: bool,
}

/// Primary API for the provenance ledger.
#[async_trait]
pub trait ProvenanceApi: Send + Sync {
    /// Admits a candidate custody event as a Pending transaction.
    ///
    /// Creates the product lazily when `first_transaction` is set; otherwise
    /// the product must already exist. The product's description/status are
    /// overwritten with this submission's values either way.
    ///
    /// # Errors
    /// - `Unauthorized`: actor is not an approved participant
    /// - `Validation`: blank or oversized free-text fields
    /// - `ProductNotFound`: continuation submission for an unknown product
    async fn submit(
        &self,
        request: SubmitRequest,
        actor: &Actor,
    ) -> Result<Transaction, LedgerError>;

    /// The calling participant's own transactions, newest first.
    async fn list_mine(&self, actor: &Actor) -> Result<Vec<Transaction>, LedgerError>;

    /// All Pending transactions awaiting admin review, newest first.
    async fn list_pending(&self, actor: &Actor) -> Result<Vec<Transaction>, LedgerError>;

    /// Confirmed chain for a product plus the verifier's verdict.
    ///
    /// Read-only; never mutates anything and requires no role.
    async fn get_chain(&self, product_id: ProductId) -> Result<ProductChain, LedgerError>;

    /// Admits a Pending transaction into the trusted chain.
    ///
    /// Verifies the product's existing confirmed chain first; the candidate
    /// itself was anchored at submission time and is not re-checked here.
    ///
    /// # Errors
    /// - `Unauthorized`: actor is not an admin
    /// - `TransactionNotFound`: unknown id
    /// - `Conflict`: transaction already left Pending
    /// - `IntegrityViolation`: existing chain failed verification; the
    ///   candidate stays Pending
    async fn confirm(
        &self,
        id: TransactionId,
        actor: &Actor,
    ) -> Result<Transaction, LedgerError>;

    /// Discards a Pending transaction.
    ///
    /// Confirmed transactions cannot be retracted; re-cancelling an already
    /// Cancelled transaction also reports `Conflict` (the status CAS only
    /// transitions out of Pending).
    async fn cancel(
        &self,
        id: TransactionId,
        actor: &Actor,
    ) -> Result<Transaction, LedgerError>;
}
