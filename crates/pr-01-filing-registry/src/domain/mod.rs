//! # Domain Layer
//!
//! Pure domain logic for the Filing Registry subsystem: the content-addressed
//! archive, the per-inventor filing index, and input validation.
//!
//! This module contains NO I/O dependencies and takes no locks; concurrency
//! control is the service layer's job.

pub mod archive;
pub mod entities;
pub mod errors;
pub mod index;
pub mod validation;
pub mod value_objects;

pub use archive::*;
pub use entities::*;
pub use errors::*;
pub use index::*;
pub use validation::*;
pub use value_objects::*;
