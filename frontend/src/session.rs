//! Upload session state machine.
//!
//! One [`Session`] lives for the lifetime of the page. It owns the staged
//! file and a single [`SessionPhase`], so a result and a failure message can
//! never be shown together.
//!
//! ```text
//!            select_file            begin_submit
//!  Idle ─────────────────▶ Idle ─────────────────▶ Submitting
//!   ▲ ▲                     │ no file                 │      │
//!   │ │ select_file         ▼                         │ Ok   │ Err
//!   │ └──────────────── Failed ◀──────────────────────┼──────┘
//!   │ reset                                           ▼
//!   └─────────────────────────────────────────── Succeeded
//! ```
//!
//! The session is generic over the file handle so it can be driven without
//! a browser; the app instantiates it with [`web_sys::File`].

use chrono::{DateTime, Local};

use crate::types::{AnalysisError, AnalysisResult, AppResult};

/// Session driven by the browser's file picker.
pub type BrowserSession = Session<web_sys::File>;

/// Display state of the upload session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    /// Waiting for the user
    Idle,
    /// One request is in flight
    Submitting,
    /// Last submission produced a result
    Succeeded(CompletedAnalysis),
    /// Last submission failed with a displayable message
    Failed(String),
}

/// A result together with the local time it arrived.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletedAnalysis {
    pub result: AnalysisResult,
    pub completed_at: DateTime<Local>,
}

impl CompletedAnalysis {
    /// Completion time formatted as HH:MM:SS.
    pub fn completed_time(&self) -> String {
        self.completed_at.format("%H:%M:%S").to_string()
    }
}

/// Staged file plus the current phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Session<F> {
    pending: Option<F>,
    phase: SessionPhase,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            pending: None,
            phase: SessionPhase::Idle,
        }
    }
}

impl<F: Clone> Session<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn pending(&self) -> Option<&F> {
        self.pending.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SessionPhase::Submitting)
    }

    pub fn result(&self) -> Option<&CompletedAnalysis> {
        match &self.phase {
            SessionPhase::Succeeded(done) => Some(done),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Stage the picker's current file, clearing any failure message.
    ///
    /// `None` (picker cancelled or emptied) unstages the previous file.
    /// Returns `false` and leaves the session untouched while a request is
    /// in flight.
    pub fn select_file(&mut self, file: Option<F>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.pending = file;
        if matches!(self.phase, SessionPhase::Failed(_)) {
            self.phase = SessionPhase::Idle;
        }
        true
    }

    /// Move to `Submitting` and hand back the file to send.
    ///
    /// With no staged file the session moves to `Failed` with the
    /// validation message and `None` is returned, so no request is made.
    /// A call while already submitting is ignored.
    pub fn begin_submit(&mut self) -> Option<F> {
        if self.is_submitting() {
            return None;
        }
        match self.pending.clone() {
            Some(file) => {
                self.phase = SessionPhase::Submitting;
                Some(file)
            }
            None => {
                self.fail(&AnalysisError::NoFileSelected);
                None
            }
        }
    }

    /// Record the outcome of the in-flight request.
    ///
    /// The staged file is dropped on success and kept on failure so the
    /// same document can be resubmitted.
    pub fn finish(&mut self, outcome: AppResult<AnalysisResult>) {
        self.finish_at(outcome, Local::now());
    }

    fn finish_at(&mut self, outcome: AppResult<AnalysisResult>, completed_at: DateTime<Local>) {
        match outcome {
            Ok(result) => {
                self.pending = None;
                self.phase = SessionPhase::Succeeded(CompletedAnalysis {
                    result,
                    completed_at,
                });
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Clear the displayed result and go back to the empty upload form.
    pub fn reset(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.pending = None;
        self.phase = SessionPhase::Idle;
    }

    fn fail(&mut self, err: &AnalysisError) {
        self.phase = SessionPhase::Failed(err.user_message());
    }
}
