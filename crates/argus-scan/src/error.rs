use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scanning service rejected a file or URL submission.
    #[error("{message}")]
    Submission { status: u16, message: String },

    /// Fetching an analysis report failed.
    #[error("{message}")]
    ReportFetch { status: u16, message: String },

    /// The poll budget was exhausted before the report completed.
    #[error("Analysis timed out. The report is taking too long to generate.")]
    PollTimeout,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    /// HTTP status carried by the remote failure, when there is one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ScanError::Submission { status, .. } | ScanError::ReportFetch { status, .. } => {
                Some(*status)
            }
            ScanError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the failure happened below HTTP: the request never
    /// reached the service or the connection gave out.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScanError::Http(e) if e.is_connect() || e.is_timeout())
    }
}
