//! In-memory presenter that mirrors the page regions.
//!
//! Used by the tests and by anything that needs to drive a session without
//! a rendering surface.

use super::Presenter;
use crate::display::ResultView;

/// Current contents of every UI region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiSnapshot {
    pub file_name: Option<String>,
    pub preview: Option<String>,
    pub submit_enabled: bool,
    pub busy: bool,
    /// Error region text; `None` while hidden.
    pub error: Option<String>,
    pub result_visible: bool,
    pub predicted_class: Option<String>,
    pub label_class: Option<String>,
    pub confidence_text: Option<String>,
    pub indicator_width: Option<String>,
}

/// Presenter that records the last value written to each region, plus the
/// order of calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    ui: UiSnapshot,
    calls: Vec<&'static str>,
}

impl RecordingPresenter {
    pub fn ui(&self) -> &UiSnapshot {
        &self.ui
    }

    /// Presenter methods invoked so far, by name.
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn show_file_name(&mut self, name: &str) {
        self.calls.push("show_file_name");
        self.ui.file_name = Some(name.to_string());
    }

    fn show_preview(&mut self, data_url: Option<&str>) {
        self.calls.push("show_preview");
        self.ui.preview = data_url.map(str::to_string);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.calls.push("set_submit_enabled");
        self.ui.submit_enabled = enabled;
    }

    fn set_busy(&mut self, busy: bool) {
        self.calls.push("set_busy");
        self.ui.busy = busy;
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.calls.push("show_error");
        self.ui.error = message.map(str::to_string);
    }

    fn show_result(&mut self, result: Option<&ResultView>) {
        self.calls.push("show_result");
        // Hiding keeps the previous text, like a hidden DOM node.
        self.ui.result_visible = result.is_some();
        if let Some(view) = result {
            self.ui.predicted_class = Some(view.predicted_class.clone());
            self.ui.label_class = Some(view.label_class());
            self.ui.confidence_text = Some(view.confidence_text());
            self.ui.indicator_width = Some(view.indicator_width());
        }
    }
}
