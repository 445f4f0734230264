//! Analysis orchestration: one terminal outcome per invocation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use argus_core::anonymize::anonymize;
use argus_core::models::findings::FindingsDocument;
use argus_core::models::pii::AnonymizationResult;
use argus_core::models::scan::ScanReport;

use crate::error::TriageError;
use crate::routing::is_text_based;
use crate::services::{FindingsService, ScanService};

/// Advisory attached when several files are submitted to the scan path.
/// A policy choice, not a protocol limitation.
pub const MULTI_FILE_ADVISORY: &str =
    "For malware scanning, please upload one file at a time. Analyzing the first file only.";

/// One user-submitted file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputFile {
    pub name: String,
    pub contents: Vec<u8>,
}

/// What the user submitted for triage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnalysisInput {
    Files(Vec<InputFile>),
    Url(String),
}

/// The one result shape handed to the rendering layer. The consumer
/// never reaches back into the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UnifiedResult {
    /// Text-like content: sanitized, analyzed, findings returned with the
    /// mapping needed to de-anonymize them for display.
    LogAnalysis {
        anonymization: AnonymizationResult,
        findings: FindingsDocument,
    },
    /// Binary file or URL: completed multi-engine scan report.
    Scan { report: ScanReport, subject: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageOutcome {
    pub result: UnifiedResult,
    /// Non-fatal notices, e.g. that only the first file was scanned.
    pub advisories: Vec<String>,
}

/// Run one analysis to its single terminal outcome.
///
/// Text-like files (judged by the first file's extension) are sanitized
/// and sent to the AI backend; other files and URLs are submitted to the
/// scanning service and polled to completion. Validation failures happen
/// before any network call.
pub async fn run_analysis<S: ScanService, A: FindingsService>(
    scan: &S,
    ai: &A,
    input: AnalysisInput,
) -> Result<TriageOutcome, TriageError> {
    match input {
        AnalysisInput::Files(files) => analyze_files(scan, ai, files).await,
        AnalysisInput::Url(url) => analyze_url(scan, url).await,
    }
}

async fn analyze_files<S: ScanService, A: FindingsService>(
    scan: &S,
    ai: &A,
    files: Vec<InputFile>,
) -> Result<TriageOutcome, TriageError> {
    let Some(first) = files.first() else {
        return Err(TriageError::validation("Please select one or more files."));
    };

    if is_text_based(&first.name) {
        info!(count = files.len(), "routing files to AI log analysis");
        let combined = combine_text_files(&files);
        let anonymization = anonymize(&combined);
        debug!(
            replacements = anonymization.mapping.len(),
            "PII anonymized before analysis"
        );

        let findings = ai.analyze(&anonymization.sanitized_text).await?;
        return Ok(TriageOutcome {
            result: UnifiedResult::LogAnalysis {
                anonymization,
                findings,
            },
            advisories: Vec::new(),
        });
    }

    let mut advisories = Vec::new();
    if files.len() > 1 {
        warn!(count = files.len(), "multiple files on the scan path; analyzing the first only");
        advisories.push(MULTI_FILE_ADVISORY.to_string());
    }

    info!(file = first.name, "routing file to malware scan");
    let handle = scan.submit_file(&first.name, &first.contents).await?;
    let report = scan.wait_for_report(&handle).await?;

    Ok(TriageOutcome {
        result: UnifiedResult::Scan {
            report,
            subject: first.name.clone(),
        },
        advisories,
    })
}

async fn analyze_url<S: ScanService>(scan: &S, url: String) -> Result<TriageOutcome, TriageError> {
    if url.is_empty() {
        return Err(TriageError::validation("Please enter a URL."));
    }
    if !looks_like_url(&url) {
        return Err(TriageError::validation("Please enter a valid URL."));
    }

    info!(url, "routing url to malware scan");
    let handle = scan.submit_url(&url).await?;
    let report = scan.wait_for_report(&handle).await?;

    Ok(TriageOutcome {
        result: UnifiedResult::Scan {
            report,
            subject: url,
        },
        advisories: Vec::new(),
    })
}

/// Concatenate the submitted text files into one document, each prefixed
/// with a filename banner so findings can cite their source.
fn combine_text_files(files: &[InputFile]) -> String {
    let mut combined = String::new();
    for file in files {
        combined.push_str("--- ");
        combined.push_str(&file.name);
        combined.push_str(" ---\n");
        combined.push_str(&String::from_utf8_lossy(&file.contents));
        if !combined.ends_with('\n') {
            combined.push('\n');
        }
    }
    combined
}

/// Minimal URL shape check: a scheme separator with something on both
/// sides. Full parsing stays with the scanning service.
fn looks_like_url(candidate: &str) -> bool {
    candidate
        .split_once("://")
        .is_some_and(|(scheme, rest)| !scheme.is_empty() && !rest.is_empty())
}
