//! # Input Validation
//!
//! Stateless guards run before anything touches the store. Pure functions,
//! no side effects.

use super::errors::RegistryError;
use super::value_objects::DIGEST_LEN;
use shared_types::Digest;

/// Validate a candidate digest's shape.
///
/// A digest is valid iff it is exactly 32 bytes. No content constraint:
/// collision resistance is the hash function's problem, not the registry's.
pub fn validate_digest(bytes: &[u8]) -> Result<Digest, RegistryError> {
    if bytes.len() != DIGEST_LEN {
        return Err(RegistryError::InvalidDigest {
            actual: bytes.len(),
        });
    }
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(bytes);
    Ok(digest)
}

/// Validate a filing summary: ASCII only, at most `max_len` bytes.
///
/// Upstream transports may type this bound into the field itself; the
/// facade does not trust that and enforces it here, rejecting oversize or
/// non-ASCII input.
pub fn validate_summary(summary: &str, max_len: usize) -> Result<(), RegistryError> {
    if summary.len() > max_len {
        return Err(RegistryError::InvalidSummary {
            reason: format!("{} bytes exceeds limit of {}", summary.len(), max_len),
        });
    }
    if !summary.is_ascii() {
        return Err(RegistryError::InvalidSummary {
            reason: "summary must be ASCII".to_string(),
        });
    }
    Ok(())
}
