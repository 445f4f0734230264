//! Service seams the orchestrator drives. The production implementations
//! are the HTTP clients; tests substitute scripted stubs.

use std::future::Future;

use argus_ai::{AnalysisError, FindingsClient};
use argus_core::models::findings::FindingsDocument;
use argus_core::models::scan::{ScanReport, SubmissionHandle};
use argus_scan::{PollConfig, ScanClient, ScanError, poll_until_complete};

/// Submission plus bounded polling against the scanning service.
pub trait ScanService {
    fn submit_file(
        &self,
        file_name: &str,
        contents: &[u8],
    ) -> impl Future<Output = Result<SubmissionHandle, ScanError>> + Send;

    fn submit_url(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<SubmissionHandle, ScanError>> + Send;

    fn wait_for_report(
        &self,
        handle: &SubmissionHandle,
    ) -> impl Future<Output = Result<ScanReport, ScanError>> + Send;
}

impl ScanService for ScanClient {
    async fn submit_file(
        &self,
        file_name: &str,
        contents: &[u8],
    ) -> Result<SubmissionHandle, ScanError> {
        ScanClient::submit_file(self, file_name, contents).await
    }

    async fn submit_url(&self, url: &str) -> Result<SubmissionHandle, ScanError> {
        ScanClient::submit_url(self, url).await
    }

    async fn wait_for_report(&self, handle: &SubmissionHandle) -> Result<ScanReport, ScanError> {
        poll_until_complete(self, handle, &PollConfig::default()).await
    }
}

/// Structured findings from sanitized text.
pub trait FindingsService {
    fn analyze(
        &self,
        sanitized_text: &str,
    ) -> impl Future<Output = Result<FindingsDocument, AnalysisError>> + Send;
}

impl FindingsService for FindingsClient {
    async fn analyze(&self, sanitized_text: &str) -> Result<FindingsDocument, AnalysisError> {
        FindingsClient::analyze(self, sanitized_text).await
    }
}
