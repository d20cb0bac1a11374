//! Dependency resolution core.
//!
//! Pure logic with no I/O: decoding index bytes, parsing records, building
//! the filtered graph and walking it.

pub mod domain;
pub mod services;
