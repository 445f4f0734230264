//! argus-core
//!
//! Pure domain types and the PII anonymization engine.
//! No HTTP dependency — this is the shared vocabulary of the Argus system.

pub mod anonymize;
pub mod models;
