//! # Domain Entities
//!
//! Core entities for the Filing Registry subsystem.

use serde::{Deserialize, Serialize};
use shared_types::{BlockHeight, Digest, InventorId, Timestamp};

/// An immutable record of one invention filing.
///
/// Once a record is committed under its digest it never changes: there is no
/// update or delete path anywhere in the subsystem. The priority claim is
/// exactly the `(filing_date, priority_block)` pair captured here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRecord {
    /// Content digest of the invention document, the unique key.
    pub digest: Digest,
    /// Identity that submitted the filing.
    pub inventor: InventorId,
    /// Wall-clock timestamp supplied by the time oracle at filing.
    pub filing_date: Timestamp,
    /// External monotonic ordering marker (ledger block height) at filing.
    pub priority_block: BlockHeight,
    /// Short ASCII description, at most 256 bytes.
    pub summary: String,
}

/// Response to a successful filing: the committed record plus the filing id
/// assigned from the inventor's sequence.
///
/// The filing id is index metadata, not part of the record itself, which is
/// why it rides alongside rather than inside `FilingRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingReceipt {
    /// Position in the inventor's filing sequence, starting at 1.
    pub filing_id: u64,
    /// The record as committed to the archive.
    pub record: FilingRecord,
}

/// Public office-level summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeStats {
    /// Total filings ever accepted.
    pub total_inventions: u64,
    /// The fixed administrative identity, captured at initialization.
    pub office: InventorId,
}

/// Internal registry statistics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Total filings ever accepted. Always equals the archive row count.
    pub total_filings: u64,
    /// Number of distinct inventors with at least one filing.
    pub distinct_inventors: u64,
}
