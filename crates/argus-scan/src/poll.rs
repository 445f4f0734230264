//! Report polling: bounded, constant-interval retry until the scanning
//! service marks an analysis completed.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info, warn};

use argus_core::models::scan::{ScanReport, SubmissionHandle};

use crate::client::ScanClient;
use crate::error::ScanError;

/// Anything that can produce the current report for an analysis id.
/// The poller is generic over this so tests can script report sequences.
pub trait ReportSource {
    fn fetch_report(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<ScanReport, ScanError>> + Send;
}

impl ReportSource for ScanClient {
    async fn fetch_report(&self, id: &str) -> Result<ScanReport, ScanError> {
        ScanClient::fetch_report(self, id).await
    }
}

/// Polling budget: constant interval, hard attempt cap.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    /// 20 attempts 5 seconds apart — roughly 100 seconds of budget.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_attempts: 20,
        }
    }
}

/// Poll until the report reaches `completed` or the budget runs out.
///
/// A fetch failure mid-poll is not retried: it propagates immediately.
/// Transient transport blips therefore end the loop early; that matches
/// the current service contract, where only report readiness is retried.
pub async fn poll_until_complete<S: ReportSource>(
    source: &S,
    handle: &SubmissionHandle,
    config: &PollConfig,
) -> Result<ScanReport, ScanError> {
    for attempt in 1..=config.max_attempts {
        let report = source.fetch_report(handle.as_str()).await?;
        if report.is_completed() {
            info!(handle = %handle, attempt, "scan report completed");
            return Ok(report);
        }
        debug!(handle = %handle, attempt, status = ?report.status, "report not ready");
        if attempt < config.max_attempts {
            tokio::time::sleep(config.interval).await;
        }
    }

    warn!(handle = %handle, attempts = config.max_attempts, "poll budget exhausted");
    Err(ScanError::PollTimeout)
}
