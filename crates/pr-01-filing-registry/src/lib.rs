//! # Filing Registry Subsystem (pr-01)
//!
//! The Filing Registry is the system's authority for invention priority
//! claims. It accepts a pre-computed content digest for an invention
//! document, durably records who filed it and when, and guarantees that no
//! two filings can ever claim the same digest.
//!
//! ## Responsibilities
//!
//! - Enforce digest uniqueness: one digest, one filing record, forever
//! - Assign each inventor a gapless sequence of filing ids (1, 2, 3, ...)
//! - Maintain the per-inventor and global filing counters in lockstep
//! - Serve point, indexed, and batch lookups against the archive
//! - Gate the administrative detail read behind the fixed office identity
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement | Location |
//! |-----------|-------------|----------|
//! | Digest uniqueness | Check-and-insert under the write lock | `archive.rs` |
//! | Record immutability | No update or delete path exists | `archive.rs` |
//! | Gapless filing ids | Append asserts `id == count + 1` | `index.rs` |
//! | Counter agreement | Global total advances only with a filing | `service/mod.rs` |
//! | Referential integrity | Indexed digests must resolve in the archive | `service/mod.rs` |
//!
//! ## Atomicity
//!
//! A filing touches four structures: the archive row, the index row, the
//! inventor counter, and the global counter. All four are committed under a
//! single `parking_lot::RwLock` write guard, with every fallible check done
//! before the first mutation. A ledger runtime gets this atomicity for free
//! from serial block execution; a concurrent process has to make it
//! explicit, and the lock is that boundary.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): Archive, index, validation. No I/O.
//! - **Ports Layer** (`ports/`): Inbound `FilingRegistryApi` trait.
//! - **Service Layer** (`service/`): `FilingRegistryService` facade owning
//!   the shared state and the lock.
//!
//! Identity, wall-clock time, and the block-height ordering marker are
//! explicit call parameters supplied by outside collaborators; the registry
//! never reaches for ambient context.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types for convenience
pub use domain::{
    validate_digest, validate_summary, FilingReceipt, FilingRecord, InventionArchive,
    InventorIndex, OfficeStats, RegistryConfig, RegistryError, RegistryStats, DIGEST_LEN,
    MAX_BATCH_LOOKUP, MAX_SUMMARY_LEN,
};

pub use ports::FilingRegistryApi;

pub use service::FilingRegistryService;
