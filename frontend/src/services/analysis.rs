//! HTTP service for sending a PDF to the analysis backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::AppConfig;
use crate::types::{AnalysisError, AnalysisResult, AppResult};

/// Multipart field name expected by the backend.
pub const FILE_FIELD: &str = "file";

/// Upload a document and wait for its analysis.
///
/// The browser sets the multipart `Content-Type` (with boundary) itself,
/// so no header is added here.
pub async fn analyze_document(file: &File, config: &AppConfig) -> AppResult<AnalysisResult> {
    let form_data = FormData::new()
        .map_err(|e| AnalysisError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| AnalysisError::Transport(format!("Failed to append file: {:?}", e)))?;

    let url = config.upload_url();
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| AnalysisError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AnalysisError::Transport(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AnalysisError::Transport(format!("Failed to read response: {}", e)))?;

    interpret_response(status, response.ok(), &body)
}

/// Turn a status code and raw body into an analysis or an error.
pub fn interpret_response(status: u16, ok: bool, body: &str) -> AppResult<AnalysisResult> {
    if !ok {
        return Err(AnalysisError::from_response(status, body));
    }

    serde_json::from_str::<AnalysisResult>(body)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FALLBACK_MESSAGE;

    #[test]
    fn test_success_body_is_parsed() {
        let body = r#"{
            "id": "temp_id",
            "filename": "employment.pdf",
            "summary": "Employment contract with a non-compete clause.",
            "risk_level": "LOW",
            "entities": [{"text": "Jane Doe", "label": "PERSON"}]
        }"#;

        let result = interpret_response(200, true, body).unwrap();
        assert_eq!(result.filename, "employment.pdf");
        assert_eq!(result.summary, "Employment contract with a non-compete clause.");
        assert_eq!(result.entities.len(), 1);
    }

    #[test]
    fn test_error_status_uses_detail() {
        let body = r#"{"detail": "Only PDF files are supported."}"#;

        let err = interpret_response(400, false, body).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Backend {
                status: 400,
                detail: Some("Only PDF files are supported.".into()),
            }
        );
    }

    #[test]
    fn test_error_status_without_body() {
        let err = interpret_response(500, false, "").unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_success_with_wrong_shape_is_malformed() {
        let err = interpret_response(200, true, r#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }
}
