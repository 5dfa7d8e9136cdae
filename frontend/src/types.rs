//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend response structures
//! - **Risk Types** - Risk badge classification
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// API Response Types
// =============================================================================

/// Analysis returned by the backend `/upload` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Storage id assigned by the backend, when it returns one
    #[serde(default)]
    pub id: Option<String>,
    /// Name of the analyzed document
    pub filename: String,
    /// Generated summary
    pub summary: String,
    /// Risk label as sent by the backend ("Low", "HIGH", ...)
    pub risk_level: String,
    /// Named entities, in backend order
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl AnalysisResult {
    /// Parsed risk category.
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_label(&self.risk_level)
    }
}

/// A named entity detected in the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Text span
    pub text: String,
    /// Entity label (ORG, PERSON, DATE, ...)
    pub label: String,
}

/// Error body returned by the backend on failure.
///
/// `detail` is kept loose: FastAPI sends a string for explicit errors but
/// an array of objects for request validation failures.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The detail message, if it is a non-empty string.
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string)
    }
}

// =============================================================================
// Risk Types
// =============================================================================

/// Risk category used for the badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Any label outside the known set
    Other(String),
}

impl RiskLevel {
    /// Case-insensitive parse of a backend risk label.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Other(trimmed.to_string()),
        }
    }

    /// Get CSS class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
            RiskLevel::Other(_) => "risk-unknown",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Shown when submit is triggered without a selected file.
pub const NO_FILE_MESSAGE: &str = "Please select a PDF file first.";

/// Shown when the backend cannot be reached or gives no usable detail.
pub const FALLBACK_MESSAGE: &str = "Error uploading file. Make sure the backend is running.";

/// Shown when a successful response cannot be read as an analysis.
pub const MALFORMED_MESSAGE: &str = "The backend returned an unexpected response.";

/// Errors of a single analysis attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Submit was triggered with no file selected.
    #[error("no file selected")]
    NoFileSelected,

    /// The request could not be built or sent.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Backend { status: u16, detail: Option<String> },

    /// A success response did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Build a backend error from a status code and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        AnalysisError::Backend { status, detail }
    }

    /// Message displayed to the user.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            AnalysisError::Backend { detail: Some(detail), .. } => detail.clone(),
            AnalysisError::Backend { detail: None, .. } | AnalysisError::Transport(_) => {
                FALLBACK_MESSAGE.to_string()
            }
            AnalysisError::MalformedResponse(_) => MALFORMED_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "id": "665f1c2e9b1d4a0012345678",
            "filename": "lease.pdf",
            "summary": "A commercial lease between two parties.",
            "risk_level": "Medium",
            "entities": [
                {"text": "Acme Corp", "label": "ORG"},
                {"text": "1 January 2024", "label": "DATE"}
            ]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.id.as_deref(), Some("665f1c2e9b1d4a0012345678"));
        assert_eq!(result.filename, "lease.pdf");
        assert_eq!(result.entities.len(), 2);
        assert_eq!(result.entities[0].label, "ORG");
        assert_eq!(result.risk(), RiskLevel::Medium);
    }

    #[test]
    fn test_response_without_id_or_entities() {
        let json = r#"{"filename": "nda.pdf", "summary": "", "risk_level": "Low", "extra": 1}"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.id.is_none());
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_risk_level_is_case_insensitive() {
        for label in ["HIGH", "High", "high", " high "] {
            assert_eq!(RiskLevel::from_label(label), RiskLevel::High);
            assert_eq!(RiskLevel::from_label(label).css_class(), "risk-high");
        }
        assert_eq!(RiskLevel::from_label("mEdIuM").css_class(), "risk-medium");
        assert_eq!(RiskLevel::from_label("LOW").css_class(), "risk-low");
    }

    #[test]
    fn test_unknown_risk_level_keeps_label() {
        let risk = RiskLevel::from_label("Critical");
        assert_eq!(risk, RiskLevel::Other("Critical".into()));
        assert_eq!(risk.css_class(), "risk-unknown");
    }

    #[test]
    fn test_backend_detail_is_surfaced_verbatim() {
        let err = AnalysisError::from_response(400, r#"{"detail": "Only PDF files are supported."}"#);
        assert_eq!(err.user_message(), "Only PDF files are supported.");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_validation_detail_array_uses_fallback() {
        let body = r#"{"detail": [{"loc": ["body", "file"], "msg": "field required"}]}"#;
        let err = AnalysisError::from_response(422, body);
        assert_eq!(err, AnalysisError::Backend { status: 422, detail: None });
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_non_json_error_body_uses_fallback() {
        let err = AnalysisError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);

        let err = AnalysisError::from_response(500, r#"{"detail": "  "}"#);
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_transport_and_validation_messages() {
        let err = AnalysisError::Transport("Failed to fetch".into());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert_eq!(AnalysisError::NoFileSelected.user_message(), NO_FILE_MESSAGE);
        assert_eq!(
            AnalysisError::MalformedResponse("missing field `summary`".into()).user_message(),
            MALFORMED_MESSAGE
        );
    }
}
