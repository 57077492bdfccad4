//! Outbound (driven) ports: the storage collaborator contract and time.
//!
//! The core never talks to a concrete storage engine; everything it needs
//! from durable storage is captured by `LedgerStore`. Confirmed rows are
//! immutable once written, which is what makes concurrent verification reads
//! safe without coordination.

use async_trait::async_trait;
use ledger_types::{
    ConfirmationStatus, ParticipantId, Product, ProductId, StoreError, Ticks, Transaction,
    TransactionId,
};

/// Result of the atomic confirmation-status compare-and-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationUpdate {
    /// Stored status was Pending; the new status was applied.
    Applied(Transaction),
    /// Stored status had already left Pending; nothing was written.
    NotPending(ConfirmationStatus),
    /// No transaction with that id exists.
    Missing,
}

/// Durable keyed storage for products and transactions.
///
/// Ordering contracts:
/// - `chain_head`: most recently created Confirmed transaction for the
///   product; creation-time ties resolve toward the most recently inserted.
/// - `confirmed_chain`: Confirmed only, creation time ascending.
/// - `transactions_by_participant` / `pending_transactions`: creation time
///   descending (newest first).
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    async fn transaction(&self, id: &TransactionId) -> Result<Option<Transaction>, StoreError>;

    /// Atomically upserts the product and inserts the transaction.
    ///
    /// Submit's no-partial-application boundary: either both records land
    /// or neither does.
    async fn record_submission(
        &self,
        product: Product,
        transaction: Transaction,
    ) -> Result<(), StoreError>;

    async fn chain_head(&self, product_id: &ProductId)
        -> Result<Option<Transaction>, StoreError>;

    async fn confirmed_chain(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<Transaction>, StoreError>;

    async fn transactions_by_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Vec<Transaction>, StoreError>;

    async fn pending_transactions(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Atomic compare-and-set on `confirmation`.
    ///
    /// Applies `new_status` only if the stored value is still Pending, so a
    /// concurrent confirm/cancel loser observes `NotPending` instead of
    /// silently overwriting. This is the only mutation transactions ever
    /// undergo.
    async fn update_confirmation(
        &self,
        id: &TransactionId,
        new_status: ConfirmationStatus,
    ) -> Result<ConfirmationUpdate, StoreError>;
}

/// Time source for transaction creation timestamps.
///
/// Abstracted so tests can pin deterministic ticks; the digest input
/// includes the tick value, so the same instant must be used for storing
/// and hashing.
pub trait TimeSource: Send + Sync {
    /// Current time in 100-nanosecond ticks since 0001-01-01T00:00:00Z.
    fn now_ticks(&self) -> Ticks;
}
