//! # Value Objects
//!
//! Constants and configuration for the Filing Registry subsystem.

use serde::{Deserialize, Serialize};

/// Required digest length in bytes (SHA-256 sized).
pub const DIGEST_LEN: usize = 32;

/// Maximum summary length in bytes. Summaries are ASCII, so bytes == chars.
pub const MAX_SUMMARY_LEN: usize = 256;

/// Maximum number of digests a single batch lookup may carry.
pub const MAX_BATCH_LOOKUP: usize = 10;

/// Configuration for the filing registry.
///
/// The defaults are the protocol limits; they are exposed as configuration
/// so an operator can tighten them without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum digests per batch lookup (default: 10).
    pub max_batch_lookup: usize,
    /// Maximum summary length in bytes (default: 256).
    pub max_summary_len: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_batch_lookup: MAX_BATCH_LOOKUP,
            max_summary_len: MAX_SUMMARY_LEN,
        }
    }
}
