//! Presentation port.

use crate::display::ResultView;

/// The UI regions the session writes to.
///
/// Implemented by the web frontend over reactive signals, and by
/// [`RecordingPresenter`](super::RecordingPresenter) in tests.
pub trait Presenter {
    /// Selected-file label.
    fn show_file_name(&mut self, name: &str);

    /// Image preview. `None` clears it.
    fn show_preview(&mut self, data_url: Option<&str>);

    /// Submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Busy indicator.
    fn set_busy(&mut self, busy: bool);

    /// Error region. `None` hides it.
    fn show_error(&mut self, message: Option<&str>);

    /// Result region. `None` hides it.
    fn show_result(&mut self, result: Option<&ResultView>);
}
