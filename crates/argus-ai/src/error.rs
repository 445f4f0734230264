use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The backend returned a failure envelope.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend refused the content on safety grounds.
    #[error("AI analysis blocked by safety settings. Reason: {0}")]
    Blocked(String),

    /// The response carried no usable candidate and no reason.
    #[error("AI analysis returned no valid response.")]
    NoResponse,

    /// The candidate text was not a valid findings document. Never
    /// silently coerced into the clean sentinel.
    #[error("AI response was not a valid findings document: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl AnalysisError {
    /// HTTP status carried by the remote failure, when there is one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AnalysisError::Backend { status, .. } => Some(*status),
            AnalysisError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the failure happened below HTTP.
    pub fn is_transport(&self) -> bool {
        matches!(self, AnalysisError::Http(e) if e.is_connect() || e.is_timeout())
    }
}
