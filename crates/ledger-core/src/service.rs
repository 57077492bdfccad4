//! # Ledger Service
//!
//! Orchestrates admission, confirmation and verification against the
//! outbound ports. This is the only place the concurrency guards live:
//!
//! - `submit` holds a per-product async mutex across the chain-head read and
//!   the submission write, so two submissions for the same product cannot
//!   interleave their read-resolve-write sequences.
//! - `confirm`/`cancel` go through the store's compare-and-set; the loser of
//!   a race observes `Conflict`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use ledger_crypto::GENESIS_HASH;
use ledger_types::{
    Actor, ConfirmationStatus, LedgerError, Product, ProductId, Transaction, TransactionId,
};
use tokio::sync::Mutex;

use crate::domain::{build_candidate, verify_chain, LedgerConfig, SubmitRequest};
use crate::ports::inbound::{ProductChain, ProvenanceApi};
use crate::ports::outbound::{ConfirmationUpdate, LedgerStore, TimeSource};

/// Provenance ledger service.
pub struct LedgerService<S> {
    store: Arc<S>,
    time: Arc<dyn TimeSource>,
    config: LedgerConfig,
    /// One submission mutex per product, created on first use and never
    /// dropped (products are never deleted).
    submit_locks: Mutex<HashMap<ProductId, Arc<Mutex<()>>>>,
}

impl<S: LedgerStore> LedgerService<S> {
    pub fn new(store: Arc<S>, time: Arc<dyn TimeSource>, config: LedgerConfig) -> Self {
        Self {
            store,
            time,
            config,
            submit_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn product_lock(&self, product_id: ProductId) -> Arc<Mutex<()>> {
        let mut locks = self.submit_locks.lock().await;
        locks.entry(product_id).or_default().clone()
    }

    async fn load_transaction(&self, id: &TransactionId) -> Result<Transaction, LedgerError> {
        self.store
            .transaction(id)
            .await?
            .ok_or(LedgerError::TransactionNotFound(*id))
    }

    /// Applies the status CAS and maps its outcome onto the error taxonomy.
    async fn transition(
        &self,
        id: &TransactionId,
        new_status: ConfirmationStatus,
    ) -> Result<Transaction, LedgerError> {
        match self.store.update_confirmation(id, new_status).await? {
            ConfirmationUpdate::Applied(tx) => Ok(tx),
            ConfirmationUpdate::NotPending(status) => {
                Err(LedgerError::Conflict { id: *id, status })
            }
            ConfirmationUpdate::Missing => Err(LedgerError::TransactionNotFound(*id)),
        }
    }
}

#[async_trait]
impl<S: LedgerStore> ProvenanceApi for LedgerService<S> {
    async fn submit(
        &self,
        request: SubmitRequest,
        actor: &Actor,
    ) -> Result<Transaction, LedgerError> {
        if !actor.is_approved_participant() {
            return Err(LedgerError::Unauthorized(actor.id));
        }
        request.validate(&self.config)?;

        // Serialize the read-resolve-write sequence per product so two
        // submissions cannot both resolve the same chain head.
        let lock = self.product_lock(request.product_id).await;
        let _guard = lock.lock().await;

        let product = match self.store.product(&request.product_id).await? {
            None if !request.first_transaction => {
                return Err(LedgerError::ProductNotFound(request.product_id));
            }
            // Lazy creation on a declared first transaction; otherwise the
            // latest submitted attributes win, confirmed or not.
            None | Some(_) => Product {
                id: request.product_id,
                description: request.description.clone(),
                status: request.status.clone(),
            },
        };

        let previous_hash = match self.store.chain_head(&request.product_id).await? {
            Some(head) => head.current_hash,
            None => GENESIS_HASH.to_string(),
        };

        let candidate = build_candidate(
            &request,
            actor.id,
            previous_hash,
            self.time.now_ticks(),
        );
        self.store
            .record_submission(product, candidate.clone())
            .await?;

        tracing::info!(
            "[ledger] transaction {} submitted for product {} by {}",
            candidate.id,
            candidate.product_id,
            candidate.participant_id,
        );
        Ok(candidate)
    }

    async fn list_mine(&self, actor: &Actor) -> Result<Vec<Transaction>, LedgerError> {
        if !actor.is_approved_participant() {
            return Err(LedgerError::Unauthorized(actor.id));
        }
        Ok(self.store.transactions_by_participant(&actor.id).await?)
    }

    async fn list_pending(&self, actor: &Actor) -> Result<Vec<Transaction>, LedgerError> {
        if !actor.is_admin() {
            return Err(LedgerError::Unauthorized(actor.id));
        }
        Ok(self.store.pending_transactions().await?)
    }

    async fn get_chain(&self, product_id: ProductId) -> Result<ProductChain, LedgerError> {
        let transactions = self.store.confirmed_chain(&product_id).await?;
        let verdict = verify_chain(&transactions);
        if !verdict.is_valid() {
            tracing::warn!(
                "[ledger] chain for product {} failed verification: {:?}",
                product_id,
                verdict,
            );
        }
        Ok(ProductChain {
            transactions,
            chain_valid: verdict.is_valid(),
        })
    }

    async fn confirm(
        &self,
        id: TransactionId,
        actor: &Actor,
    ) -> Result<Transaction, LedgerError> {
        if !actor.is_admin() {
            return Err(LedgerError::Unauthorized(actor.id));
        }

        let tx = self.load_transaction(&id).await?;
        if tx.confirmation == ConfirmationStatus::Confirmed {
            return Err(LedgerError::Conflict {
                id,
                status: ConfirmationStatus::Confirmed,
            });
        }

        // Gate on the chain as it exists before admitting this candidate;
        // the candidate was anchored to the head at submission time.
        let chain = self.store.confirmed_chain(&tx.product_id).await?;
        let verdict = verify_chain(&chain);
        if !verdict.is_valid() {
            tracing::warn!(
                "[ledger] refusing to confirm {}: chain for product {} is invalid ({:?})",
                id,
                tx.product_id,
                verdict,
            );
            return Err(LedgerError::IntegrityViolation(tx.product_id));
        }

        let confirmed = self.transition(&id, ConfirmationStatus::Confirmed).await?;
        tracing::info!(
            "[ledger] transaction {} confirmed into chain for product {}",
            confirmed.id,
            confirmed.product_id,
        );
        Ok(confirmed)
    }

    async fn cancel(
        &self,
        id: TransactionId,
        actor: &Actor,
    ) -> Result<Transaction, LedgerError> {
        if !actor.is_admin() {
            return Err(LedgerError::Unauthorized(actor.id));
        }

        let tx = self.load_transaction(&id).await?;
        if tx.confirmation == ConfirmationStatus::Confirmed {
            return Err(LedgerError::Conflict {
                id,
                status: ConfirmationStatus::Confirmed,
            });
        }

        let cancelled = self.transition(&id, ConfirmationStatus::Cancelled).await?;
        tracing::info!("[ledger] transaction {} cancelled", cancelled.id);
        Ok(cancelled)
    }
}
