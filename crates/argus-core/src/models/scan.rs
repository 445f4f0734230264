use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for one in-flight analysis at the scanning service.
///
/// Has no meaning beyond being a poll key; its lifetime is bounded by the
/// polling loop that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionHandle(String);

impl SubmissionHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a scan analysis. Transitions monotonically
/// queued → in-progress → completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanStatus {
    Queued,
    InProgress,
    Completed,
}

/// Aggregate engine verdict counts. Only meaningful once the report
/// status is `Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCounts {
    #[serde(default)]
    pub malicious: u32,
    #[serde(default)]
    pub suspicious: u32,
    #[serde(default)]
    pub harmless: u32,
    #[serde(default)]
    pub undetected: u32,
}

impl VerdictCounts {
    pub fn total(&self) -> u32 {
        self.malicious + self.suspicious + self.harmless + self.undetected
    }

    /// Collapse per-engine counts into a single overall verdict.
    pub fn overall(&self) -> Verdict {
        if self.malicious > 0 {
            Verdict::Malicious
        } else if self.suspicious > 0 {
            Verdict::Suspicious
        } else if self.harmless > 0 || self.undetected > 0 {
            Verdict::Clean
        } else {
            Verdict::Inconclusive
        }
    }
}

/// Overall classification derived from [`VerdictCounts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Malicious,
    Suspicious,
    Clean,
    Inconclusive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Malicious => "malicious",
            Verdict::Suspicious => "suspicious",
            Verdict::Clean => "clean",
            Verdict::Inconclusive => "inconclusive",
        };
        f.write_str(label)
    }
}

/// One engine's classification of the submitted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineResult {
    pub category: String,
    /// Engine-specific detection label, e.g. a malware family name.
    #[serde(default)]
    pub result: Option<String>,
}

/// A scan analysis report as returned by the scanning service.
///
/// Read-only to this system; produced by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub status: ScanStatus,
    #[serde(default)]
    pub stats: VerdictCounts,
    #[serde(default)]
    pub results: BTreeMap<String, EngineResult>,
}

impl ScanReport {
    pub fn is_completed(&self) -> bool {
        self.status == ScanStatus::Completed
    }
}
