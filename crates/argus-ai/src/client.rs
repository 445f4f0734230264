use serde::Serialize;
use tracing::info;

use argus_core::models::findings::FindingsDocument;

use crate::envelope::{ResponseEnvelope, extract_findings};
use crate::error::AnalysisError;

/// Client for the generative analysis proxy. Only ever sees sanitized
/// text; anonymization happens before content reaches this layer.
pub struct FindingsClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    #[serde(rename = "sanitizedText")]
    sanitized_text: &'a str,
}

impl FindingsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send sanitized text for analysis and parse the structured findings.
    pub async fn analyze(&self, sanitized_text: &str) -> Result<FindingsDocument, AnalysisError> {
        info!(chars = sanitized_text.len(), "requesting AI findings");

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { sanitized_text })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&body).unwrap_or_default();

        if !status.is_success() {
            return Err(AnalysisError::Backend {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| "AI analysis failed.".to_string()),
            });
        }

        let findings = extract_findings(&envelope)?;
        info!(
            clean = findings.is_clean(),
            count = findings.findings().len(),
            "AI findings received"
        );
        Ok(findings)
    }
}
