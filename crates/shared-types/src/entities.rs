//! # Core Domain Entities
//!
//! Primitive value types consumed by the filing registry and any future
//! subsystem that needs to talk about digests, inventors, or ledger context.

use serde::{Deserialize, Serialize};

/// A 32-byte content digest (SHA-256 sized).
pub type Digest = [u8; 32];

/// Ledger block height, used as the external priority/ordering marker.
pub type BlockHeight = u64;

/// Wall-clock timestamp in seconds since the Unix epoch.
pub type Timestamp = u64;

/// Opaque identity handle for a submitter.
///
/// The identity collaborator (ledger, session layer, whatever fronts the
/// registry) mints these; the registry only ever compares them for equality
/// and uses them as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct InventorId(pub [u8; 32]);

impl InventorId {
    /// Short hex form for log lines (first 8 bytes).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl std::fmt::Display for InventorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
