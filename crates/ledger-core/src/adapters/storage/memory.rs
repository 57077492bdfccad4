//! In-memory `LedgerStore` for unit and integration tests.
//!
//! A single `RwLock` over the whole state gives `record_submission` and
//! `update_confirmation` their atomicity. Production supplies a
//! database-backed adapter with equivalent transactional guarantees.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use ledger_types::{
    ConfirmationStatus, ParticipantId, Product, ProductId, StoreError, Transaction, TransactionId,
};

use crate::ports::outbound::{ConfirmationUpdate, LedgerStore};

#[derive(Default)]
struct Inner {
    products: HashMap<ProductId, Product>,
    transactions: HashMap<TransactionId, Transaction>,
    /// Insertion sequence per transaction, the tie-breaker for equal
    /// creation timestamps (most recently inserted wins head resolution).
    insertion: HashMap<TransactionId, u64>,
    next_seq: u64,
}

impl Inner {
    fn sort_key(&self, tx: &Transaction) -> (u64, u64) {
        (
            tx.created_at,
            self.insertion.get(&tx.id).copied().unwrap_or(0),
        )
    }
}

/// In-memory ledger store.
#[derive(Default)]
pub struct InMemoryLedgerStore {
    inner: RwLock<Inner>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError("ledger store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError("ledger store lock poisoned".into()))
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.read()?.products.get(id).cloned())
    }

    async fn transaction(&self, id: &TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(self.read()?.transactions.get(id).cloned())
    }

    async fn record_submission(
        &self,
        product: Product,
        transaction: Transaction,
    ) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.products.insert(product.id, product);
        inner.insertion.insert(transaction.id, seq);
        inner.transactions.insert(transaction.id, transaction);
        Ok(())
    }

    async fn chain_head(
        &self,
        product_id: &ProductId,
    ) -> Result<Option<Transaction>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .transactions
            .values()
            .filter(|tx| tx.product_id == *product_id && tx.is_confirmed())
            .max_by_key(|tx| inner.sort_key(tx))
            .cloned())
    }

    async fn confirmed_chain(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<Transaction>, StoreError> {
        let inner = self.read()?;
        let mut chain: Vec<Transaction> = inner
            .transactions
            .values()
            .filter(|tx| tx.product_id == *product_id && tx.is_confirmed())
            .cloned()
            .collect();
        chain.sort_by_key(|tx| inner.sort_key(tx));
        Ok(chain)
    }

    async fn transactions_by_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Vec<Transaction>, StoreError> {
        let inner = self.read()?;
        let mut txs: Vec<Transaction> = inner
            .transactions
            .values()
            .filter(|tx| tx.participant_id == *participant_id)
            .cloned()
            .collect();
        txs.sort_by_key(|tx| std::cmp::Reverse(inner.sort_key(tx)));
        Ok(txs)
    }

    async fn pending_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let inner = self.read()?;
        let mut txs: Vec<Transaction> = inner
            .transactions
            .values()
            .filter(|tx| tx.confirmation == ConfirmationStatus::Pending)
            .cloned()
            .collect();
        txs.sort_by_key(|tx| std::cmp::Reverse(inner.sort_key(tx)));
        Ok(txs)
    }

    async fn update_confirmation(
        &self,
        id: &TransactionId,
        new_status: ConfirmationStatus,
    ) -> Result<ConfirmationUpdate, StoreError> {
        let mut inner = self.write()?;
        let Some(tx) = inner.transactions.get_mut(id) else {
            return Ok(ConfirmationUpdate::Missing);
        };
        if tx.confirmation != ConfirmationStatus::Pending {
            return Ok(ConfirmationUpdate::NotPending(tx.confirmation));
        }
        tx.confirmation = new_status;
        Ok(ConfirmationUpdate::Applied(tx.clone()))
    }
}
