//! argus-scan
//!
//! Submission client and report poller for the multi-engine scanning
//! service proxy.

pub mod client;
pub mod error;
pub mod poll;

pub use client::ScanClient;
pub use error::ScanError;
pub use poll::{PollConfig, ReportSource, poll_until_complete};
