//! Display helpers shared by the components.
//!
//! Everything here is plain data derived from the [`Session`](crate::session::Session),
//! kept out of the `view!` trees so it can be checked without a DOM.

use crate::session::{CompletedAnalysis, SessionPhase};
use crate::types::Entity;

/// Label shown next to the file input when nothing is selected.
pub const FILE_PROMPT: &str = "Choose PDF file...";

/// Shown instead of the entity list when it is empty.
pub const NO_ENTITIES_MESSAGE: &str = "No entities detected";

pub const SUBMIT_LABEL: &str = "Upload & Analyze";
pub const SUBMITTING_LABEL: &str = "Analyzing...";

/// Steps listed in the "How it works" panel.
pub const HOW_IT_WORKS: [&str; 5] = [
    "Upload a PDF document",
    "AI generates an intelligent summary",
    "Extract named entities (people, organizations, locations)",
    "Calculate risk level based on legal keywords",
    "View detailed analysis results",
];

/// Text for the file input label.
pub fn file_label(selected: Option<String>) -> String {
    selected.unwrap_or_else(|| FILE_PROMPT.to_string())
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// The submit button is only active with a staged file and nothing in flight.
pub fn submit_disabled(submitting: bool, has_file: bool) -> bool {
    submitting || !has_file
}

/// The workflow panel is hidden once a result or an error is on screen.
pub fn shows_info_panel(phase: &SessionPhase) -> bool {
    matches!(phase, SessionPhase::Idle | SessionPhase::Submitting)
}

/// Everything the result card renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub document_id: Option<String>,
    pub filename: String,
    pub summary: String,
    pub risk_label: String,
    pub risk_class: &'static str,
    pub entities: Vec<Entity>,
    pub completed_at: String,
}

impl ResultView {
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// `None` when the card should show [`NO_ENTITIES_MESSAGE`].
    pub fn entity_list(&self) -> Option<&[Entity]> {
        if self.entities.is_empty() {
            None
        } else {
            Some(&self.entities)
        }
    }
}

impl From<&CompletedAnalysis> for ResultView {
    fn from(done: &CompletedAnalysis) -> Self {
        let result = &done.result;
        Self {
            document_id: result.id.clone(),
            filename: result.filename.clone(),
            summary: result.summary.clone(),
            risk_label: result.risk_level.clone(),
            risk_class: result.risk().css_class(),
            entities: result.entities.clone(),
            completed_at: done.completed_time(),
        }
    }
}
