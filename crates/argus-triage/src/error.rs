use thiserror::Error;

use argus_ai::AnalysisError;
use argus_scan::ScanError;

/// Guidance shown instead of a raw 403 from either service.
pub const ACCESS_DENIED_MESSAGE: &str = "Access Denied (403). The provided API key may be invalid, \
     expired, or lack permissions for this resource. Please verify your API key and permissions.";

/// Guidance shown when the request never reached the service.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your internet connection and \
     ensure ad-blockers are not interfering with API requests.";

#[derive(Debug, Error)]
pub enum TriageError {
    /// The submission was unusable before any network call was made.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl TriageError {
    pub fn validation(message: impl Into<String>) -> Self {
        TriageError::Validation(message.into())
    }

    /// The single categorized message shown to the end user.
    ///
    /// Two remote-failure signatures get friendlier text: HTTP 403
    /// becomes API-key guidance, and transport-level failures become
    /// network guidance. Everything else passes through unchanged.
    pub fn user_message(&self) -> String {
        let status = match self {
            TriageError::Scan(e) => e.http_status(),
            TriageError::Analysis(e) => e.http_status(),
            TriageError::Validation(_) => None,
        };
        if status == Some(403) {
            return ACCESS_DENIED_MESSAGE.to_string();
        }

        let transport = match self {
            TriageError::Scan(e) => e.is_transport(),
            TriageError::Analysis(e) => e.is_transport(),
            TriageError::Validation(_) => false,
        };
        if transport {
            return NETWORK_ERROR_MESSAGE.to_string();
        }

        self.to_string()
    }
}
