//! # Ports Layer
//!
//! Driving ports for the Filing Registry subsystem. There are no driven
//! ports: identity, wall-clock time, and the ordering marker arrive as
//! explicit call parameters, so the core needs nothing injected.

pub mod inbound;

pub use inbound::*;
