//! Ledger configuration.

/// Submission validation limits.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Maximum length of the free-text custody status.
    pub max_status_len: usize,
    /// Maximum length of the transaction description.
    pub max_description_len: usize,
    /// Maximum length of the location field.
    pub max_location_len: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_status_len: 256,
            max_description_len: 4_096,
            max_location_len: 512,
        }
    }
}
