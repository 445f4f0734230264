//! argus-ai
//!
//! Findings client for the generative analysis backend: sends sanitized
//! text, extracts the first candidate completion, and parses it into a
//! structured findings document.

pub mod client;
pub mod envelope;
pub mod error;

pub use client::FindingsClient;
pub use error::AnalysisError;
