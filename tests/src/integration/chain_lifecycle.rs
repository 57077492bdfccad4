//! Full chain lifecycle: submit, confirm, extend, cancel, read back.

#[cfg(test)]
mod tests {
    use crate::integration::Harness;
    use ledger_core::ports::inbound::ProvenanceApi;
    use ledger_crypto::GENESIS_HASH;
    use ledger_types::{ConfirmationStatus, LedgerError};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_three_hop_custody_chain() {
        let h = Harness::new();
        let product_id = Uuid::new_v4();

        // Hop 1: producer registers the product.
        let t1 = h
            .service
            .submit(h.request(product_id, true, "manufactured"), &h.participant)
            .await
            .unwrap();
        assert_eq!(t1.previous_hash, GENESIS_HASH);
        h.service.confirm(t1.id, &h.admin).await.unwrap();

        // Hop 2: carrier picks it up.
        h.time.advance(36_000_000_000); // one hour of ticks
        let t2 = h
            .service
            .submit(h.request(product_id, false, "in transit"), &h.participant)
            .await
            .unwrap();
        assert_eq!(t2.previous_hash, t1.current_hash);
        h.service.confirm(t2.id, &h.admin).await.unwrap();

        // Hop 3: delivered.
        h.time.advance(36_000_000_000);
        let t3 = h
            .service
            .submit(h.request(product_id, false, "delivered"), &h.participant)
            .await
            .unwrap();
        assert_eq!(t3.previous_hash, t2.current_hash);
        h.service.confirm(t3.id, &h.admin).await.unwrap();

        let chain = h.service.get_chain(product_id).await.unwrap();
        assert!(chain.chain_valid);
        let ids: Vec<_> = chain.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t1.id, t2.id, t3.id]);

        // Chain-link invariant over the returned sequence.
        assert_eq!(chain.transactions[0].previous_hash, GENESIS_HASH);
        for pair in chain.transactions.windows(2) {
            assert_eq!(pair[1].previous_hash, pair[0].current_hash);
        }
    }

    #[tokio::test]
    async fn test_chain_for_unknown_product_is_empty_and_valid() {
        let h = Harness::new();
        let chain = h.service.get_chain(Uuid::new_v4()).await.unwrap();
        assert!(chain.chain_valid);
        assert!(chain.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_branch_never_enters_history() {
        let h = Harness::new();
        let product_id = Uuid::new_v4();

        let t1 = h
            .service
            .submit(h.request(product_id, true, "manufactured"), &h.participant)
            .await
            .unwrap();
        h.service.confirm(t1.id, &h.admin).await.unwrap();

        // A mistaken submission gets cancelled by the admin.
        h.time.advance(1_000);
        let mistake = h
            .service
            .submit(h.request(product_id, false, "wrong scan"), &h.participant)
            .await
            .unwrap();
        h.service.cancel(mistake.id, &h.admin).await.unwrap();

        // The replacement still anchors to t1, not to the cancelled event.
        h.time.advance(1_000);
        let t2 = h
            .service
            .submit(h.request(product_id, false, "in transit"), &h.participant)
            .await
            .unwrap();
        assert_eq!(t2.previous_hash, t1.current_hash);
        h.service.confirm(t2.id, &h.admin).await.unwrap();

        let chain = h.service.get_chain(product_id).await.unwrap();
        assert!(chain.chain_valid);
        let ids: Vec<_> = chain.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t1.id, t2.id]);
    }

    #[tokio::test]
    async fn test_admin_queue_drains_as_decisions_land() {
        let h = Harness::new();
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();

        let a = h
            .service
            .submit(h.request(p1, true, "manufactured"), &h.participant)
            .await
            .unwrap();
        h.time.advance(1);
        let b = h
            .service
            .submit(h.request(p2, true, "manufactured"), &h.participant)
            .await
            .unwrap();

        let queue = h.service.list_pending(&h.admin).await.unwrap();
        assert_eq!(queue.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b.id, a.id]);

        h.service.confirm(a.id, &h.admin).await.unwrap();
        h.service.cancel(b.id, &h.admin).await.unwrap();

        assert!(h.service.list_pending(&h.admin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_participant_history_spans_products_and_outcomes() {
        let h = Harness::new();
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();

        let a = h
            .service
            .submit(h.request(p1, true, "manufactured"), &h.participant)
            .await
            .unwrap();
        h.time.advance(1);
        let b = h
            .service
            .submit(h.request(p2, true, "manufactured"), &h.participant)
            .await
            .unwrap();
        h.service.confirm(a.id, &h.admin).await.unwrap();
        h.service.cancel(b.id, &h.admin).await.unwrap();

        let mine = h.service.list_mine(&h.participant).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].id, b.id);
        assert_eq!(mine[0].confirmation, ConfirmationStatus::Cancelled);
        assert_eq!(mine[1].id, a.id);
        assert_eq!(mine[1].confirmation, ConfirmationStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_unapproved_participant_locked_out() {
        let h = Harness::new();
        let unapproved = ledger_types::Actor {
            approved: false,
            ..h.participant.clone()
        };

        let err = h
            .service
            .submit(h.request(Uuid::new_v4(), true, "manufactured"), &unapproved)
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized(_)));

        let err = h.service.list_mine(&unapproved).await.unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized(_)));
    }
}
