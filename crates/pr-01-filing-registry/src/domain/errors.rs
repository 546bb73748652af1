//! # Domain Errors
//!
//! Error taxonomy for the Filing Registry subsystem.
//!
//! Every operation is a request/response unit: all failures come back as
//! values, none are retried internally. `ConsistencyFault` is the one
//! variant callers should never see in normal operation; it marks a broken
//! internal invariant (e.g. an indexed digest missing from the archive) and
//! is logged at error level wherever it is produced.

use shared_types::Digest;
use thiserror::Error;

/// Errors surfaced by filing and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Digest is not exactly 32 bytes.
    #[error("Invalid digest: expected 32 bytes, got {actual}")]
    InvalidDigest { actual: usize },

    /// Summary is too long or contains non-ASCII characters.
    #[error("Invalid summary: {reason}")]
    InvalidSummary { reason: String },

    /// The digest already has a filing record; filings are permanent.
    #[error("Already filed: digest {}", hex::encode(.digest))]
    AlreadyFiled { digest: Digest },

    /// No filing record for the requested digest or (inventor, filing id).
    #[error("Filing not found")]
    NotFound,

    /// Batch lookup carried more digests than the configured cap.
    #[error("Batch too large: {actual} digests, limit is {max}")]
    BatchTooLarge { actual: usize, max: usize },

    /// Caller is not the office identity.
    #[error("Permission denied")]
    PermissionDenied,

    /// Internal invariant violation. Never expected under normal operation.
    #[error("Consistency fault: {message}")]
    ConsistencyFault { message: String },
}
