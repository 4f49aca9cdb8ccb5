//! Squash duplicate revenue records in a JSON ledger file.
//!
//! Records sharing a date and primary client (optionally also a type) are
//! merged into a single consolidated record; everything else passes through
//! untouched. The result is written back sorted by date.

pub mod domain;
pub mod error;
pub mod json;
