//! # Invention Archive
//!
//! The canonical content-addressed table: digest → filing record. Owns
//! uniqueness enforcement.
//!
//! The archive is append-only. `insert` is the only mutator and it refuses
//! to overwrite; no update or delete method exists, which is what makes
//! `FilingRecord` immutability structural rather than a convention.
//!
//! Callers needing check-and-insert atomicity against concurrent filers of
//! the same digest must hold the service write lock across the call; the
//! archive itself is a plain single-threaded table.

use super::entities::FilingRecord;
use super::errors::RegistryError;
use shared_types::Digest;
use std::collections::HashMap;

/// Content-addressed store of all filing records.
#[derive(Debug, Default)]
pub struct InventionArchive {
    records: HashMap<Digest, FilingRecord>,
}

impl InventionArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a filing record exists for this digest.
    pub fn exists(&self, digest: &Digest) -> bool {
        self.records.contains_key(digest)
    }

    /// Commit a new filing record under its digest.
    ///
    /// Fails with `AlreadyFiled` if the digest is taken. On success the row
    /// is permanent.
    pub fn insert(&mut self, record: FilingRecord) -> Result<(), RegistryError> {
        let digest = record.digest;
        if self.records.contains_key(&digest) {
            return Err(RegistryError::AlreadyFiled { digest });
        }
        self.records.insert(digest, record);
        Ok(())
    }

    /// Fetch the filing record for a digest.
    pub fn get(&self, digest: &Digest) -> Option<&FilingRecord> {
        self.records.get(digest)
    }

    /// Number of rows ever committed (nothing is ever removed).
    pub fn len(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
