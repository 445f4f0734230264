use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding.
///
/// The backend is instructed to emit lowercase values but is a generative
/// model, so capitalized spellings are accepted as aliases. Anything else
/// is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "Critical")]
    Critical,
    #[serde(alias = "High")]
    High,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "Low")]
    Low,
    #[serde(alias = "Informational")]
    Informational,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Informational => "informational",
        };
        f.write_str(label)
    }
}

/// The five fixed finding categories the backend is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingCategory {
    #[serde(rename = "Authentication and Access")]
    AuthenticationAndAccess,
    #[serde(rename = "Network Activity")]
    NetworkActivity,
    #[serde(rename = "System and Application Events")]
    SystemAndApplicationEvents,
    #[serde(rename = "Configuration and Policy")]
    ConfigurationAndPolicy,
    #[serde(rename = "Behavioral Anomaly")]
    BehavioralAnomaly,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FindingCategory::AuthenticationAndAccess => "Authentication and Access",
            FindingCategory::NetworkActivity => "Network Activity",
            FindingCategory::SystemAndApplicationEvents => "System and Application Events",
            FindingCategory::ConfigurationAndPolicy => "Configuration and Policy",
            FindingCategory::BehavioralAnomaly => "Behavioral Anomaly",
        };
        f.write_str(label)
    }
}

/// Finding counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveritySummary {
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
    #[serde(default)]
    pub informational: u32,
}

impl SeveritySummary {
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low + self.informational
    }
}

/// One structured security observation from the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub severity: Severity,
    /// Timestamp as reported in the source material; `N/A` when unknown.
    #[serde(default = "unknown_timestamp")]
    pub timestamp: String,
    pub title: String,
    pub details: String,
    #[serde(rename = "action")]
    pub recommended_action: String,
}

fn unknown_timestamp() -> String {
    "N/A".to_string()
}

/// Findings grouped with their severity summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsReport {
    #[serde(rename = "summaryStats", default)]
    pub summary_stats: SeveritySummary,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

/// The exact string the backend emits for content with nothing to report.
pub const CLEAN_SENTINEL: &str = "No security issues or notable events found.";

/// The document produced by the analysis backend: either the clean
/// sentinel string for benign content, or a structured findings report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FindingsDocument {
    Report(FindingsReport),
    Clean(String),
}

impl<'de> Deserialize<'de> for FindingsDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Report(FindingsReport),
            Text(String),
        }

        // Only the literal sentinel counts as clean. Any other bare string
        // is the model going off script and must not read as a clean bill.
        match Raw::deserialize(deserializer)? {
            Raw::Report(report) => Ok(FindingsDocument::Report(report)),
            Raw::Text(text) if text == CLEAN_SENTINEL => Ok(FindingsDocument::Clean(text)),
            Raw::Text(text) => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&text),
                &"a findings report or the no-findings sentinel",
            )),
        }
    }
}

impl FindingsDocument {
    pub fn is_clean(&self) -> bool {
        matches!(self, FindingsDocument::Clean(_))
    }

    pub fn findings(&self) -> &[Finding] {
        match self {
            FindingsDocument::Report(report) => &report.findings,
            FindingsDocument::Clean(_) => &[],
        }
    }
}
