//! Adapters implementing the outbound ports.

pub mod storage;
pub mod time;

pub use storage::InMemoryLedgerStore;
pub use time::{ManualTimeSource, SystemTimeSource};
