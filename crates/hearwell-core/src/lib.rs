//! hearwell-core
//!
//! Pure domain types for the hearing clinic: audiometric frequencies,
//! threshold maps, exam records, and customer/visit records.
//! No scoring logic lives here. This is the shared vocabulary of the
//! Hearwell system.

pub mod error;
pub mod frequency;
pub mod models;
pub mod nullable;
pub mod parse;
pub mod thresholds;
