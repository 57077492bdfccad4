//! # Provenance Ledger Core
//!
//! Admission, confirmation and verification for the per-product hash chain.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Confirmed chain links: `tx[0].previous_hash == GENESIS_HASH`, `tx[i].previous_hash == tx[i-1].current_hash` | `domain/verifier.rs` walk; `service.rs` head resolution under per-product lock |
//! | INVARIANT-2 | `current_hash` fixed at creation, never recomputed | `domain/submission.rs` - only construction site |
//! | INVARIANT-3 | Only Confirmed transactions anchor the chain | `ports/outbound.rs` - `chain_head`/`confirmed_chain` contracts |
//! | INVARIANT-4 | Monotonic status: Pending → {Confirmed, Cancelled}, terminals stay | `ports/outbound.rs` - `update_confirmation` CAS |
//!
//! ## Concurrency Guards
//!
//! | Hazard | Guard |
//! |--------|-------|
//! | Chain-head race (two submits read the same head) | per-product async mutex in `service.rs` |
//! | Confirmation race (confirm vs cancel) | atomic compare-and-set on `confirmation` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/ - In-memory LedgerStore for tests                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - ProvenanceApi trait                        │
//! │  ports/outbound.rs - LedgerStore, TimeSource traits             │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/submission.rs - validation + candidate construction     │
//! │  domain/verifier.rs   - chain replay and linkage checks         │
//! │  domain/config.rs     - LedgerConfig                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use service::LedgerService;
