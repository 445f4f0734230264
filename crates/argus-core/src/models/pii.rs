use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The closed set of PII kinds the anonymizer detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    Ip,
    Email,
    User,
}

impl PiiKind {
    /// Placeholder prefix for this kind, e.g. `EMAIL` in `EMAIL_2`.
    pub fn prefix(self) -> &'static str {
        match self {
            PiiKind::Ip => "IP",
            PiiKind::Email => "EMAIL",
            PiiKind::User => "USER",
        }
    }
}

/// Mapping from placeholder (e.g. `IP_1`) to the original matched substring.
///
/// Created fresh per anonymization run and owned by the caller; never
/// persisted. Ordered so that placeholders render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiMapping(BTreeMap<String, String>);

impl PiiMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, placeholder: String, original: String) {
        self.0.insert(placeholder, original);
    }

    /// Look up the original value behind a placeholder.
    pub fn original(&self, placeholder: &str) -> Option<&str> {
        self.0.get(placeholder).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, o)| (p.as_str(), o.as_str()))
    }

    /// Substitute original values back into rendered text.
    ///
    /// Used when displaying backend findings, which reference the
    /// placeholders rather than the real values. Longer placeholders are
    /// substituted first so that `IP_1` never eats the prefix of `IP_10`.
    pub fn restore(&self, text: &str) -> String {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_by_key(|(placeholder, _)| std::cmp::Reverse(placeholder.len()));

        let mut restored = text.to_string();
        for (placeholder, original) in entries {
            restored = restored.replace(placeholder, original);
        }
        restored
    }
}

/// The output of one anonymization run.
///
/// Not mutated after creation; the mapping travels with the sanitized
/// text so the caller can de-anonymize results for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationResult {
    pub sanitized_text: String,
    pub mapping: PiiMapping,
}
