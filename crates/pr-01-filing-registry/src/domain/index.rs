//! # Inventor Index
//!
//! Per-inventor ordered filing list plus the per-inventor counters. Owns
//! sequencing: for each inventor the filing ids form a contiguous run
//! `1..=N` with no gaps or repeats, where `N` is that inventor's count.
//!
//! Sequencing is per-inventor, not global. Two inventors never share id
//! space; two filings by the same inventor must be serialized by the caller
//! (the service write lock) so id assignment is race-free.

use super::errors::RegistryError;
use shared_types::{Digest, InventorId};
use std::collections::HashMap;

/// Ordered index of filings per inventor.
#[derive(Debug, Default)]
pub struct InventorIndex {
    /// (inventor, filing id) → digest.
    entries: HashMap<(InventorId, u64), Digest>,
    /// inventor → filing count. Absent means zero filings.
    counters: HashMap<InventorId, u64>,
}

impl InventorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the inventor's next filing will receive. Does not mutate.
    pub fn next_filing_id(&self, inventor: &InventorId) -> u64 {
        self.count(inventor) + 1
    }

    /// Record (inventor, filing id) → digest.
    ///
    /// The id must be exactly `count + 1`. A correct caller can never pass
    /// anything else, so a violation means sequencing state is corrupt and
    /// comes back as a `ConsistencyFault` rather than being papered over.
    pub fn append(
        &mut self,
        inventor: InventorId,
        filing_id: u64,
        digest: Digest,
    ) -> Result<(), RegistryError> {
        let expected = self.next_filing_id(&inventor);
        if filing_id != expected {
            return Err(RegistryError::ConsistencyFault {
                message: format!(
                    "non-sequential filing id {} for inventor {} (expected {})",
                    filing_id,
                    inventor.short_hex(),
                    expected
                ),
            });
        }
        self.entries.insert((inventor, filing_id), digest);
        Ok(())
    }

    /// Advance the inventor's counter by exactly one.
    ///
    /// Must be paired with `append` under the same write guard; the service
    /// is the only caller and does exactly that.
    pub fn advance_counter(&mut self, inventor: &InventorId) {
        *self.counters.entry(*inventor).or_insert(0) += 1;
    }

    /// Resolve (inventor, filing id) to a digest.
    pub fn lookup(&self, inventor: &InventorId, filing_id: u64) -> Option<Digest> {
        self.entries.get(&(*inventor, filing_id)).copied()
    }

    /// Filing count for an inventor, zero if they have never filed.
    pub fn count(&self, inventor: &InventorId) -> u64 {
        self.counters.get(inventor).copied().unwrap_or(0)
    }

    /// Number of distinct inventors with at least one filing.
    pub fn distinct_inventors(&self) -> u64 {
        self.counters.len() as u64
    }

    /// All of an inventor's digests in filing order, ids 1..=N.
    pub fn filings_of(&self, inventor: &InventorId) -> Vec<Digest> {
        (1..=self.count(inventor))
            .filter_map(|id| self.lookup(inventor, id))
            .collect()
    }
}
