//! Time source adapters.

use std::sync::atomic::{AtomicU64, Ordering};

use ledger_types::Ticks;

use crate::ports::outbound::TimeSource;

/// Ticks between 0001-01-01T00:00:00Z and the Unix epoch.
const UNIX_EPOCH_TICKS: u64 = 621_355_968_000_000_000;

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_ticks(&self) -> Ticks {
        let since_epoch = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        UNIX_EPOCH_TICKS + (since_epoch.as_nanos() / 100) as u64
    }
}

/// Manually advanced time source for deterministic tests.
pub struct ManualTimeSource {
    ticks: AtomicU64,
}

impl ManualTimeSource {
    pub fn new(initial: Ticks) -> Self {
        Self {
            ticks: AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ticks: u64) {
        self.ticks.fetch_add(ticks, Ordering::SeqCst);
    }

    pub fn set(&self, ticks: Ticks) {
        self.ticks.store(ticks, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ticks(&self) -> Ticks {
        self.ticks.load(Ordering::SeqCst)
    }
}
