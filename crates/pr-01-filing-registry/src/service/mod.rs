//! # Filing Registry Service
//!
//! The facade that owns all registry state and implements
//! [`FilingRegistryApi`]. This is the sole writer of the archive, the
//! inventor index, and both counters; nothing else in the crate mutates.
//!
//! ## Locking
//!
//! One `parking_lot::RwLock` guards the whole store. Lookups take the read
//! lock and run in parallel; `file` takes the write lock for its entire
//! critical section, which serializes all filings process-wide and gives
//! both required exclusions at once:
//!
//! - per-digest: exactly one of two same-digest filers sees "not filed"
//! - per-inventor: filing id assignment can never race
//!
//! ## Atomicity
//!
//! Inside `file`, every fallible check runs before the first mutation.
//! Once mutation starts, the remaining steps are infallible map inserts and
//! integer increments under the same guard, so the four writes (archive
//! row, index row, inventor counter, global counter) commit as one unit.
//! If a mutation does report an error anyway, sequencing state is corrupt;
//! it is logged at error level and surfaced as `ConsistencyFault`.


use crate::domain::{
    validate_digest, validate_summary, FilingReceipt, FilingRecord, InventionArchive,
    InventorIndex, OfficeStats, RegistryConfig, RegistryError, RegistryStats,
};
use crate::ports::FilingRegistryApi;
use parking_lot::RwLock;
use shared_types::{BlockHeight, Digest, InventorId, Timestamp};
use tracing::{debug, error, info, warn};

/// All mutable registry state, guarded as one unit.
#[derive(Debug, Default)]
struct RegistryState {
    /// digest → record. Owns uniqueness.
    archive: InventionArchive,
    /// (inventor, filing id) → digest, plus per-inventor counters.
    index: InventorIndex,
    /// Total filings ever accepted. Equals the archive row count and the
    /// sum of all inventor counters.
    total_filings: u64,
}

/// The registry facade.
///
/// Create once at startup with the office identity; share via `Arc`.
pub struct FilingRegistryService {
    state: RwLock<RegistryState>,
    /// Fixed administrative identity, captured at initialization and never
    /// reassigned.
    office: InventorId,
    config: RegistryConfig,
}

impl FilingRegistryService {
    /// Create an empty registry with `office` as the administrative identity.
    pub fn new(office: InventorId) -> Self {
        Self::with_config(office, RegistryConfig::default())
    }

    /// Create with custom limits.
    pub fn with_config(office: InventorId, config: RegistryConfig) -> Self {
        info!(
            "[pr-01] Filing registry initialized, office {}",
            office.short_hex()
        );
        Self {
            state: RwLock::new(RegistryState::default()),
            office,
            config,
        }
    }

    /// The configured office identity.
    pub fn office(&self) -> InventorId {
        self.office
    }

    /// Single lookup against an already-validated digest, shared by the
    /// point, batch, and office read paths.
    fn get_record(&self, digest: &Digest) -> Result<FilingRecord, RegistryError> {
        self.state
            .read()
            .archive
            .get(digest)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    fn fault(err: RegistryError) -> RegistryError {
        error!("[pr-01] ❌ Internal consistency fault: {err}");
        err
    }
}

impl FilingRegistryApi for FilingRegistryService {
    fn file(
        &self,
        digest: &[u8],
        summary: &str,
        inventor: InventorId,
        filing_date: Timestamp,
        priority_block: BlockHeight,
    ) -> Result<FilingReceipt, RegistryError> {
        // Stateless guards first, outside the lock.
        let digest = validate_digest(digest)?;
        validate_summary(summary, self.config.max_summary_len)?;

        let mut state = self.state.write();

        if state.archive.exists(&digest) {
            warn!(
                "[pr-01] Duplicate filing attempt for {} by {}",
                hex::encode(&digest[..8]),
                inventor.short_hex()
            );
            return Err(RegistryError::AlreadyFiled { digest });
        }

        let filing_id = state.index.next_filing_id(&inventor);
        let record = FilingRecord {
            digest,
            inventor,
            filing_date,
            priority_block,
            summary: summary.to_string(),
        };

        // All checks passed. The guard is still held, so the four writes
        // below commit as one unit; none of them can fail on valid state.
        state
            .index
            .append(inventor, filing_id, digest)
            .map_err(Self::fault)?;
        state.archive.insert(record.clone()).map_err(Self::fault)?;
        state.index.advance_counter(&inventor);
        state.total_filings += 1;

        info!(
            "[pr-01] 📜 Filing #{} accepted: {} by {} at block {}",
            filing_id,
            hex::encode(&digest[..8]),
            inventor.short_hex(),
            priority_block
        );

        Ok(FilingReceipt { filing_id, record })
    }

    fn lookup(&self, digest: &[u8]) -> Result<FilingRecord, RegistryError> {
        let digest = validate_digest(digest)?;
        self.get_record(&digest)
    }

    fn lookup_by_inventor(
        &self,
        inventor: InventorId,
        filing_id: u64,
    ) -> Result<FilingRecord, RegistryError> {
        let state = self.state.read();
        let digest = state
            .index
            .lookup(&inventor, filing_id)
            .ok_or(RegistryError::NotFound)?;

        // Referential integrity: an indexed digest must resolve. A miss here
        // is a broken store, not a normal NotFound.
        state.archive.get(&digest).cloned().ok_or_else(|| {
            Self::fault(RegistryError::ConsistencyFault {
                message: format!(
                    "indexed digest {} (inventor {}, filing {}) missing from archive",
                    hex::encode(&digest[..8]),
                    inventor.short_hex(),
                    filing_id
                ),
            })
        })
    }

    fn batch_lookup(
        &self,
        digests: &[&[u8]],
    ) -> Result<Vec<Result<FilingRecord, RegistryError>>, RegistryError> {
        if digests.len() > self.config.max_batch_lookup {
            return Err(RegistryError::BatchTooLarge {
                actual: digests.len(),
                max: self.config.max_batch_lookup,
            });
        }

        // One read guard for the whole batch: every slot sees the same
        // snapshot, and each resolves independently of its neighbors.
        let state = self.state.read();
        Ok(digests
            .iter()
            .map(|bytes| {
                let digest = validate_digest(bytes)?;
                state
                    .archive
                    .get(&digest)
                    .cloned()
                    .ok_or(RegistryError::NotFound)
            })
            .collect())
    }

    fn is_inventor(&self, digest: &[u8], candidate: InventorId) -> bool {
        let Ok(digest) = validate_digest(digest) else {
            return false;
        };
        self.state
            .read()
            .archive
            .get(&digest)
            .is_some_and(|record| record.inventor == candidate)
    }

    fn inventor_filing_count(&self, inventor: InventorId) -> u64 {
        self.state.read().index.count(&inventor)
    }

    fn inventor_filings(&self, inventor: InventorId) -> Vec<Digest> {
        self.state.read().index.filings_of(&inventor)
    }

    fn total_inventions(&self) -> u64 {
        self.state.read().total_filings
    }

    fn office_stats(&self) -> OfficeStats {
        OfficeStats {
            total_inventions: self.state.read().total_filings,
            office: self.office,
        }
    }

    fn stats(&self) -> RegistryStats {
        let state = self.state.read();
        RegistryStats {
            total_filings: state.total_filings,
            distinct_inventors: state.index.distinct_inventors(),
        }
    }

    fn office_get_invention_details(
        &self,
        digest: &[u8],
        caller: InventorId,
    ) -> Result<FilingRecord, RegistryError> {
        // Permission before anything else: unauthorized callers learn
        // nothing from this path, not even whether the digest is valid.
        if caller != self.office {
            warn!(
                "[pr-01] Office read denied for caller {}",
                caller.short_hex()
            );
            return Err(RegistryError::PermissionDenied);
        }
        debug!("[pr-01] Office read by {}", caller.short_hex());
        let digest = validate_digest(digest)?;
        self.get_record(&digest)
    }
}
