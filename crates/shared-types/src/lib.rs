//! # Shared Types Crate
//!
//! Primitive domain types shared across the Prior-Chain subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Explicit Context**: Identity, timestamps, and ordering markers are
//!   plain values passed by callers, never ambient execution context. This
//!   keeps every subsystem testable without a live ledger behind it.

pub mod entities;

pub use entities::*;
