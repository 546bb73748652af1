//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Filing Registry subsystem.

use crate::domain::{FilingReceipt, FilingRecord, OfficeStats, RegistryError, RegistryStats};
use shared_types::{BlockHeight, Digest, InventorId, Timestamp};

/// Primary API for the Filing Registry subsystem.
///
/// Digest parameters are raw byte slices on purpose: shape validation is the
/// registry's first duty, so wrong-length input must be representable and
/// must come back as `InvalidDigest` rather than being unconstructable.
///
/// All methods take `&self`; the implementation is responsible for interior
/// locking so that lookups run in parallel and filings serialize correctly.
pub trait FilingRegistryApi: Send + Sync {
    /// File an invention digest.
    ///
    /// `filing_date` and `priority_block` come from the caller's time and
    /// ordering oracles; the registry records them verbatim.
    ///
    /// ## Returns
    ///
    /// - `Ok(FilingReceipt)`: the committed record plus assigned filing id
    /// - `Err(InvalidDigest)`: digest is not exactly 32 bytes
    /// - `Err(InvalidSummary)`: summary over 256 bytes or not ASCII
    /// - `Err(AlreadyFiled)`: the digest already has a record
    fn file(
        &self,
        digest: &[u8],
        summary: &str,
        inventor: InventorId,
        filing_date: Timestamp,
        priority_block: BlockHeight,
    ) -> Result<FilingReceipt, RegistryError>;

    /// Fetch the filing record for a digest. Pure read.
    fn lookup(&self, digest: &[u8]) -> Result<FilingRecord, RegistryError>;

    /// Fetch an inventor's k-th filing (ids start at 1).
    fn lookup_by_inventor(
        &self,
        inventor: InventorId,
        filing_id: u64,
    ) -> Result<FilingRecord, RegistryError>;

    /// Look up several digests in one call, at most 10.
    ///
    /// The result has the same length and order as the input; each slot is
    /// exactly what `lookup` would return for that digest, and a failing
    /// slot never aborts the rest. An oversize input is rejected whole with
    /// `BatchTooLarge`.
    #[allow(clippy::type_complexity)]
    fn batch_lookup(
        &self,
        digests: &[&[u8]],
    ) -> Result<Vec<Result<FilingRecord, RegistryError>>, RegistryError>;

    /// Whether `candidate` is the inventor of record for `digest`.
    ///
    /// False both for an unfiled digest and for a filed one owned by someone
    /// else; this operation never surfaces `NotFound`.
    fn is_inventor(&self, digest: &[u8], candidate: InventorId) -> bool;

    /// How many filings this inventor has made (0 if none).
    fn inventor_filing_count(&self, inventor: InventorId) -> u64;

    /// An inventor's digests in filing order.
    fn inventor_filings(&self, inventor: InventorId) -> Vec<Digest>;

    /// Total filings ever accepted.
    fn total_inventions(&self) -> u64;

    /// Public office summary: total filings plus the office identity.
    fn office_stats(&self) -> OfficeStats;

    /// Internal statistics snapshot.
    fn stats(&self) -> RegistryStats;

    /// Administrative record read, office identity only.
    ///
    /// Any caller other than the office gets `PermissionDenied`, whether or
    /// not the digest exists.
    fn office_get_invention_details(
        &self,
        digest: &[u8],
        caller: InventorId,
    ) -> Result<FilingRecord, RegistryError>;
}
