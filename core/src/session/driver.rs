//! Stateful driver around [`transition`](super::transition).

use super::{transition, Effect, Event, Model, Presenter, SessionState};
use crate::error::{ClassifyResult, FileError};
use crate::models::{ClassificationResult, SelectedFile};

/// Long-lived session for one page.
///
/// Owns the [`Model`], feeds events through the pure transition function and
/// forwards the resulting effects to its presenter. The request effect is
/// handed back to the caller, which owns the transport.
///
/// ```rust
/// use neuroscan::{ClassificationResult, RecordingPresenter, SelectedFile, UploadSession};
///
/// let mut session = UploadSession::new(RecordingPresenter::default());
/// session.file_chosen(Some(SelectedFile::new("scan1.png", vec![0x89, b'P', b'N', b'G'])));
///
/// let file = session.submit_requested().expect("request issued");
/// assert_eq!(file.name(), "scan1.png");
///
/// session.response_received(Ok(ClassificationResult::new("NonDemented", 0.8734)));
/// assert_eq!(session.presenter().ui().confidence_text.as_deref(), Some("Confidence: 87.34%"));
/// ```
#[derive(Debug)]
pub struct UploadSession<P> {
    model: Model,
    presenter: P,
}

impl<P: Presenter> UploadSession<P> {
    /// Start in [`SessionState::Idle`].
    pub fn new(presenter: P) -> Self {
        Self {
            model: Model::default(),
            presenter,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.model.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.model.file.as_ref()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Whether a submit right now would issue a request.
    pub fn can_submit(&self) -> bool {
        self.model.can_submit()
    }

    /// Apply an event. Returns the file to classify when the event started a
    /// request; the caller must eventually report back with
    /// [`response_received`](Self::response_received).
    pub fn dispatch(&mut self, event: Event) -> Option<SelectedFile> {
        let before = self.model.state.name();
        let (model, effects) = transition(std::mem::take(&mut self.model), event);
        self.model = model;

        if before != self.model.state.name() {
            log::debug!("Session {} -> {}", before, self.model.state.name());
        }

        let mut request = None;
        for effect in effects {
            match effect {
                Effect::ShowFileName(name) => self.presenter.show_file_name(&name),
                Effect::ShowPreview(url) => self.presenter.show_preview(url.as_deref()),
                Effect::SetSubmitEnabled(enabled) => self.presenter.set_submit_enabled(enabled),
                Effect::SetBusy(busy) => self.presenter.set_busy(busy),
                Effect::ShowError(message) => self.presenter.show_error(message.as_deref()),
                Effect::ShowResult(view) => self.presenter.show_result(view.as_ref()),
                Effect::Classify(file) => request = Some(file),
            }
        }
        request
    }

    /// The user picked a file (or cleared the picker).
    pub fn file_chosen(&mut self, file: Option<SelectedFile>) {
        self.dispatch(Event::FileChosen(file));
    }

    /// The user picked a file the browser could not read.
    pub fn file_unreadable(&mut self, err: FileError) {
        self.dispatch(Event::FileUnreadable(err));
    }

    /// The user asked for a classification.
    pub fn submit_requested(&mut self) -> Option<SelectedFile> {
        self.dispatch(Event::SubmitRequested)
    }

    /// The outstanding request settled.
    pub fn response_received(&mut self, outcome: ClassifyResult<ClassificationResult>) {
        self.dispatch(Event::ResponseReceived(outcome));
    }
}
