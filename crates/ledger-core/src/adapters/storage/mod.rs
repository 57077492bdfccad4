//! Storage adapters for the `LedgerStore` port.

pub mod memory;

pub use memory::InMemoryLedgerStore;
