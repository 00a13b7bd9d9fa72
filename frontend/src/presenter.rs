//! Reactive presenter.
//!
//! [`UiSignals`] holds one signal per page region. The session writes them
//! through the [`Presenter`] port and components read them in their views.

use leptos::*;
use neuroscan::{Presenter, ResultView};

/// Signals backing the page regions the session controls.
#[derive(Clone, Copy, Debug)]
pub struct UiSignals {
    pub file_name: RwSignal<Option<String>>,
    /// Data URL for the `<img>` preview
    pub preview: RwSignal<Option<String>>,
    pub submit_enabled: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    /// Error region text; `None` while hidden
    pub error: RwSignal<Option<String>>,
    /// Result region content; `None` while hidden
    pub result: RwSignal<Option<ResultView>>,
}

impl UiSignals {
    /// Initial page: nothing selected, submit disabled.
    pub fn new() -> Self {
        Self {
            file_name: create_rw_signal(None),
            preview: create_rw_signal(None),
            submit_enabled: create_rw_signal(false),
            busy: create_rw_signal(false),
            error: create_rw_signal(None),
            result: create_rw_signal(None),
        }
    }

    /// Placeholder text shows until the first file is chosen.
    pub fn show_placeholder(&self) -> bool {
        self.file_name.with(Option::is_none)
    }
}

impl Default for UiSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for UiSignals {
    fn show_file_name(&mut self, name: &str) {
        self.file_name.set(Some(name.to_string()));
    }

    fn show_preview(&mut self, data_url: Option<&str>) {
        self.preview.set(data_url.map(str::to_string));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy.set(busy);
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.error.set(message.map(str::to_string));
    }

    fn show_result(&mut self, result: Option<&ResultView>) {
        self.result.set(result.cloned());
    }
}
