//! argus-triage
//!
//! The orchestrator: decides per submission which analysis path applies
//! (AI log analysis for text-like files, multi-engine scanning for
//! everything else and for URLs), sequences the calls, and maps every
//! failure into a single user-facing category.

pub mod error;
pub mod routing;
pub mod run;
pub mod services;

pub use error::TriageError;
pub use run::{AnalysisInput, InputFile, TriageOutcome, UnifiedResult, run_analysis};
pub use services::{FindingsService, ScanService};
