//! Upload/classify session state machine.
//!
//! ```text
//!   Idle ──FileChosen──▶ FileSelected ──SubmitRequested──▶ Submitting
//!                             ▲                                │
//!                             └──── superseded response ───────┤
//!                                                              ├── Ok ──▶ Succeeded
//!                                                              └── Err ─▶ Failed
//!
//!   Succeeded | Failed ──FileChosen──────▶ FileSelected
//!   Succeeded | Failed ──SubmitRequested──▶ Submitting
//! ```
//!
//! [`transition`] is pure: it takes the current [`Model`] and an [`Event`]
//! and returns the next model plus the [`Effect`]s to apply. The
//! [`UploadSession`] driver owns the model and forwards effects to a
//! [`Presenter`].

mod driver;
mod presenter;
mod recording;

pub use driver::UploadSession;
pub use presenter::Presenter;
pub use recording::{RecordingPresenter, UiSnapshot};

use crate::display::ResultView;
use crate::error::{ClassifyError, ClassifyResult, FileError};
use crate::models::{is_known_class, ClassificationResult, SelectedFile};

// =============================================================================
// State
// =============================================================================

/// Where the session currently is. Exactly one value is live at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Nothing chosen yet.
    #[default]
    Idle,
    /// A file is ready to submit.
    FileSelected,
    /// One request is in flight.
    Submitting,
    /// The last request produced a result.
    Succeeded(ClassificationResult),
    /// The last request failed.
    Failed(ClassifyError),
}

impl SessionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SessionState::Submitting)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::FileSelected => "file-selected",
            SessionState::Submitting => "submitting",
            SessionState::Succeeded(_) => "succeeded",
            SessionState::Failed(_) => "failed",
        }
    }
}

/// Everything the transition function reads and writes.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub state: SessionState,
    pub file: Option<SelectedFile>,
    /// A new file was chosen while a request was in flight; its response
    /// belongs to the previous file.
    pub superseded: bool,
}

impl Model {
    /// Whether [`Event::SubmitRequested`] would issue a request.
    pub fn can_submit(&self) -> bool {
        self.file.is_some()
            && matches!(
                self.state,
                SessionState::FileSelected | SessionState::Succeeded(_) | SessionState::Failed(_)
            )
    }
}

// =============================================================================
// Events & Effects
// =============================================================================

/// Inputs to the session.
#[derive(Debug, Clone)]
pub enum Event {
    /// The file picker changed. `None` when the picker was cleared.
    FileChosen(Option<SelectedFile>),
    /// The file picker changed but the new file could not be read.
    FileUnreadable(FileError),
    /// The submit control was activated.
    SubmitRequested,
    /// The outstanding request completed.
    ResponseReceived(ClassifyResult<ClassificationResult>),
}

/// Outputs of a transition, one per UI region plus the request itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowFileName(String),
    /// `None` clears the preview.
    ShowPreview(Option<String>),
    SetSubmitEnabled(bool),
    SetBusy(bool),
    /// `None` hides the error region.
    ShowError(Option<String>),
    /// `None` hides the result region.
    ShowResult(Option<ResultView>),
    /// Send this file to the classification service.
    Classify(SelectedFile),
}

// =============================================================================
// Transition
// =============================================================================

/// Apply one event to the model.
pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::FileChosen(file) => on_file_chosen(model, file),
        Event::FileUnreadable(err) => on_file_unreadable(model, err),
        Event::SubmitRequested => on_submit_requested(model),
        Event::ResponseReceived(outcome) => on_response(model, outcome),
    }
}

fn on_file_chosen(mut model: Model, file: Option<SelectedFile>) -> (Model, Vec<Effect>) {
    let Some(file) = file.filter(|f| !f.is_empty()) else {
        log::debug!("File chooser closed without a usable file, ignoring");
        return (model, Vec::new());
    };

    let mut effects = vec![
        Effect::ShowFileName(file.name().to_string()),
        Effect::ShowPreview(file.preview_data_url()),
    ];

    if model.state.is_submitting() {
        // Keep the busy UI until the in-flight request settles.
        log::debug!("'{}' chosen while submitting, superseding pending request", file.name());
        model.superseded = true;
    } else {
        model.state = SessionState::FileSelected;
        effects.extend([
            Effect::SetSubmitEnabled(true),
            Effect::ShowError(None),
            Effect::ShowResult(None),
        ]);
    }

    model.file = Some(file);
    (model, effects)
}

fn on_file_unreadable(mut model: Model, err: FileError) -> (Model, Vec<Effect>) {
    let FileError::Unreadable { detail, .. } = &err;
    log::warn!("{}: {}", err, detail);

    // The picker no longer holds the old file, so neither does the session.
    model.file = None;
    let mut effects = vec![
        Effect::ShowFileName(err.file_name().to_string()),
        Effect::ShowPreview(None),
        Effect::ShowError(Some(err.user_message())),
    ];

    if model.state.is_submitting() {
        model.superseded = true;
    } else {
        model.state = SessionState::Idle;
        effects.extend([Effect::SetSubmitEnabled(false), Effect::ShowResult(None)]);
    }
    (model, effects)
}

fn on_submit_requested(mut model: Model) -> (Model, Vec<Effect>) {
    if !model.can_submit() {
        log::debug!("Submit ignored in state '{}'", model.state.name());
        return (model, Vec::new());
    }
    let Some(file) = model.file.clone() else {
        return (model, Vec::new());
    };

    model.state = SessionState::Submitting;
    model.superseded = false;

    let effects = vec![
        Effect::SetBusy(true),
        Effect::ShowResult(None),
        Effect::SetSubmitEnabled(false),
        Effect::ShowError(None),
        Effect::Classify(file),
    ];
    (model, effects)
}

fn on_response(
    mut model: Model,
    outcome: ClassifyResult<ClassificationResult>,
) -> (Model, Vec<Effect>) {
    if !model.state.is_submitting() {
        log::debug!("Stale response ignored in state '{}'", model.state.name());
        return (model, Vec::new());
    }

    let mut effects = Vec::with_capacity(3);

    if model.superseded {
        log::debug!("Discarding response for a superseded file");
        model.superseded = false;
        model.state = if model.file.is_some() {
            SessionState::FileSelected
        } else {
            SessionState::Idle
        };
        effects.push(Effect::SetBusy(false));
        effects.push(Effect::SetSubmitEnabled(model.file.is_some()));
        return (model, effects);
    }

    match outcome {
        Ok(result) => {
            if !is_known_class(&result.predicted_class) {
                log::debug!("Unrecognised class '{}', styled as severe", result.predicted_class);
            }
            effects.push(Effect::ShowResult(Some(ResultView::from(&result))));
            model.state = SessionState::Succeeded(result);
        }
        Err(err) => {
            match err.detail() {
                Some(detail) => log::warn!("Classification failed: {} ({})", err, detail),
                None => log::warn!("Classification failed: {}", err),
            }
            effects.push(Effect::ShowError(Some(err.user_message())));
            model.state = SessionState::Failed(err);
        }
    }

    // Cleanup runs on every outcome.
    effects.push(Effect::SetBusy(false));
    effects.push(Effect::SetSubmitEnabled(true));
    (model, effects)
}
