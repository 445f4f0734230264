//! Response envelope of the generative backend and its unwrapping.
//!
//! The backend answers with candidate completions; the first candidate's
//! text part is itself a JSON document of shape
//! `{ "analysisResult": <findings document> }`.

use serde::Deserialize;

use argus_core::models::findings::FindingsDocument;

use crate::error::AnalysisError;

#[derive(Debug, Default, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback", default)]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Top-level error message on failure envelopes.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason", default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    #[serde(rename = "analysisResult")]
    analysis_result: FindingsDocument,
}

/// Unwrap a success envelope into the findings document.
///
/// No candidates plus a block reason surfaces the reason; no candidates
/// and no reason is the generic no-response failure. A candidate whose
/// text does not parse as a findings document is a malformed response,
/// kept distinct so callers never mistake garbage for a clean result.
pub fn extract_findings(envelope: &ResponseEnvelope) -> Result<FindingsDocument, AnalysisError> {
    let Some(candidate) = envelope.candidates.first() else {
        if let Some(reason) = envelope
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(AnalysisError::Blocked(reason));
        }
        return Err(AnalysisError::NoResponse);
    };

    let Some(part) = candidate.content.parts.first() else {
        return Err(AnalysisError::NoResponse);
    };

    let payload: AnalysisPayload =
        serde_json::from_str(&part.text).map_err(AnalysisError::Malformed)?;
    Ok(payload.analysis_result)
}
