//! HTTP client for the scanning service proxy.
//!
//! Submissions are single best-effort attempts; retrying is the poller's
//! business and only for report readiness, never for submissions.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::info;

use argus_core::models::scan::{ScanReport, SubmissionHandle};

use crate::error::ScanError;

/// Client for the scanning proxy (`{base}/files`, `{base}/urls`,
/// `{base}/analyses/{id}`).
pub struct ScanClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct FileSubmission<'a> {
    file: String,
    #[serde(rename = "fileName")]
    file_name: &'a str,
}

#[derive(Serialize)]
struct UrlSubmission<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct SubmitEnvelope {
    data: SubmitData,
}

#[derive(Deserialize)]
struct SubmitData {
    id: String,
}

#[derive(Deserialize)]
struct ReportEnvelope {
    data: ReportData,
}

#[derive(Deserialize)]
struct ReportData {
    attributes: ScanReport,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

/// Remote-supplied error message from a failure body, when parseable.
fn remote_error(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error)
}

impl ScanClient {
    /// Create a client for the given proxy base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submit file bytes for scanning. The payload is base64-encoded with
    /// the filename alongside.
    pub async fn submit_file(
        &self,
        file_name: &str,
        contents: &[u8],
    ) -> Result<SubmissionHandle, ScanError> {
        info!(file_name, size = contents.len(), "submitting file for scanning");
        let payload = FileSubmission {
            file: BASE64.encode(contents),
            file_name,
        };
        self.submit("files", &payload, "file submission failed.").await
    }

    /// Submit a URL for scanning.
    pub async fn submit_url(&self, url: &str) -> Result<SubmissionHandle, ScanError> {
        info!(url, "submitting url for scanning");
        self.submit("urls", &UrlSubmission { url }, "url submission failed.")
            .await
    }

    async fn submit<P: Serialize>(
        &self,
        endpoint: &str,
        payload: &P,
        fallback: &str,
    ) -> Result<SubmissionHandle, ScanError> {
        let resp = self
            .http
            .post(format!("{}/{endpoint}", self.base_url))
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(ScanError::Submission {
                status: status.as_u16(),
                message: remote_error(&body).unwrap_or_else(|| fallback.to_string()),
            });
        }

        let envelope: SubmitEnvelope = serde_json::from_slice(&body)?;
        info!(id = envelope.data.id, "submission accepted");
        Ok(SubmissionHandle::new(envelope.data.id))
    }

    /// Fetch the current report for an analysis.
    pub async fn fetch_report(&self, id: &str) -> Result<ScanReport, ScanError> {
        let resp = self
            .http
            .get(format!("{}/analyses/{id}", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(ScanError::ReportFetch {
                status: status.as_u16(),
                message: remote_error(&body)
                    .unwrap_or_else(|| "Failed to get report.".to_string()),
            });
        }

        let envelope: ReportEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.data.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::models::scan::ScanStatus;

    #[test]
    fn remote_error_prefers_service_message() {
        assert_eq!(
            remote_error(br#"{"error":"quota exceeded"}"#).as_deref(),
            Some("quota exceeded")
        );
        assert_eq!(remote_error(br#"{"error":null}"#), None);
        assert_eq!(remote_error(b"<html>gateway error</html>"), None);
    }

    #[test]
    fn submit_envelope_carries_the_analysis_id() {
        let envelope: SubmitEnvelope =
            serde_json::from_str(r#"{"data":{"id":"abc-123","type":"analysis"}}"#).unwrap();
        assert_eq!(envelope.data.id, "abc-123");
    }

    #[test]
    fn report_envelope_unwraps_to_attributes() {
        let envelope: ReportEnvelope = serde_json::from_str(
            r#"{"data":{"attributes":{"status":"queued","stats":{},"results":{}}}}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.attributes.status, ScanStatus::Queued);
    }
}
