//! End-to-end session scenarios against a recording presenter.
//!
//! Each test plays the part of the page: it feeds user events to the session,
//! plays the part of the service by building a raw status + body, and checks
//! what ended up on screen.

use neuroscan::{
    interpret_response, ClassifyError, FileError, RecordingPresenter, SelectedFile, SessionState,
    UploadSession,
};
use serde_json::json;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01";

fn scan1() -> SelectedFile {
    SelectedFile::new("scan1.png", PNG.to_vec()).with_mime_type("image/png")
}

fn session_with_file() -> UploadSession<RecordingPresenter> {
    let mut session = UploadSession::new(RecordingPresenter::default());
    session.file_chosen(Some(scan1()));
    session
}

fn assert_cleaned_up(session: &UploadSession<RecordingPresenter>) {
    let ui = session.presenter().ui();
    assert!(!ui.busy, "busy indicator still visible");
    assert!(ui.submit_enabled, "submit still disabled");
}

#[test]
fn scenario_a_non_demented_result() {
    let mut session = session_with_file();
    {
        let ui = session.presenter().ui();
        assert_eq!(*session.state(), SessionState::FileSelected);
        assert_eq!(ui.file_name.as_deref(), Some("scan1.png"));
        assert!(ui.preview.as_deref().unwrap().starts_with("data:image/png;base64,"));
        assert!(ui.submit_enabled);
    }

    let request = session.submit_requested().expect("request issued");
    assert_eq!(request.name(), "scan1.png");
    assert_eq!(request.bytes(), PNG);
    assert!(session.presenter().ui().busy);
    assert!(!session.presenter().ui().submit_enabled);

    let body = json!({"class": "NonDemented", "confidence": 0.8734}).to_string();
    session.response_received(interpret_response(200, &body));

    let ui = session.presenter().ui();
    assert!(matches!(session.state(), SessionState::Succeeded(r) if r.predicted_class == "NonDemented"));
    assert!(ui.result_visible);
    assert_eq!(ui.predicted_class.as_deref(), Some("NonDemented"));
    assert_eq!(ui.confidence_text.as_deref(), Some("Confidence: 87.34%"));
    assert_eq!(ui.indicator_width.as_deref(), Some("87.34%"));
    assert_eq!(ui.label_class.as_deref(), Some("prediction-box info"));
    assert_eq!(ui.error, None);
    assert_cleaned_up(&session);
}

#[test]
fn scenario_b_server_error_message() {
    let mut session = session_with_file();
    session.submit_requested().expect("request issued");

    let body = json!({"error": "model unavailable"}).to_string();
    session.response_received(interpret_response(500, &body));

    let ui = session.presenter().ui();
    assert!(matches!(
        session.state(),
        SessionState::Failed(ClassifyError::Http { status: 500, .. })
    ));
    assert_eq!(ui.error.as_deref(), Some("Error: model unavailable. Please try again."));
    assert!(!ui.result_visible);
    assert_cleaned_up(&session);
}

#[test]
fn scenario_c_mild_demented_is_warning() {
    let mut session = session_with_file();
    session.submit_requested().expect("request issued");

    let body = json!({"class": "MildDemented", "confidence": 0.5}).to_string();
    session.response_received(interpret_response(200, &body));

    let ui = session.presenter().ui();
    assert_eq!(ui.predicted_class.as_deref(), Some("MildDemented"));
    assert_eq!(ui.confidence_text.as_deref(), Some("Confidence: 50.00%"));
    assert_eq!(ui.indicator_width.as_deref(), Some("50.00%"));
    assert_eq!(ui.label_class.as_deref(), Some("prediction-box warning"));
    assert_cleaned_up(&session);
}

#[test]
fn scenario_d_transport_failure() {
    let mut session = session_with_file();
    session.submit_requested().expect("request issued");

    session.response_received(Err(ClassifyError::Transport("TypeError: Failed to fetch".into())));

    let ui = session.presenter().ui();
    assert!(matches!(session.state(), SessionState::Failed(ClassifyError::Transport(_))));
    assert_eq!(
        ui.error.as_deref(),
        Some("Error: Could not reach the classification service. Please try again.")
    );
    assert!(!ui.result_visible);
    assert_cleaned_up(&session);
}

#[test]
fn submit_without_file_issues_nothing() {
    let mut session = UploadSession::new(RecordingPresenter::default());
    assert!(session.submit_requested().is_none());
    assert_eq!(*session.state(), SessionState::Idle);
    assert!(session.presenter().calls().is_empty());
}

#[test]
fn double_submit_issues_one_request() {
    let mut session = session_with_file();
    assert!(session.submit_requested().is_some());
    assert!(!session.can_submit());
    assert!(session.submit_requested().is_none());
    assert!(session.presenter().ui().busy);
}

#[test]
fn new_file_after_failure_clears_error() {
    let mut session = session_with_file();
    session.submit_requested();
    session.response_received(interpret_response(200, r#"{"error": "Failed to process image."}"#));
    assert_eq!(
        session.presenter().ui().error.as_deref(),
        Some("Error: Failed to process image. Please try again.")
    );

    let next = SelectedFile::new("scan2.jpg", b"\xff\xd8\xff\xe0rest".to_vec());
    session.file_chosen(Some(next));

    let ui = session.presenter().ui();
    assert_eq!(*session.state(), SessionState::FileSelected);
    assert_eq!(ui.file_name.as_deref(), Some("scan2.jpg"));
    assert!(ui.preview.as_deref().unwrap().starts_with("data:image/jpeg;base64,"));
    assert_eq!(ui.error, None);
    assert!(ui.submit_enabled);
}

#[test]
fn retry_after_success_resends_same_file() {
    let mut session = session_with_file();
    session.submit_requested();
    session.response_received(interpret_response(
        200,
        &json!({"class": "VeryMildDemented", "confidence": 0.61}).to_string(),
    ));
    assert!(session.presenter().ui().result_visible);

    let again = session.submit_requested().expect("resubmission allowed");
    assert_eq!(again, scan1());
    assert!(!session.presenter().ui().result_visible);
    assert!(session.presenter().ui().busy);
}

#[test]
fn cleared_picker_keeps_previous_selection() {
    let mut session = session_with_file();
    session.presenter_mut().clear_calls();
    session.file_chosen(None);
    assert!(session.presenter().calls().is_empty());
    assert_eq!(*session.state(), SessionState::FileSelected);
    assert_eq!(session.selected_file(), Some(&scan1()));
}

#[test]
fn unreadable_file_replaces_selection_with_error() {
    let mut session = session_with_file();
    session.file_unreadable(FileError::Unreadable {
        name: "scan2.png".to_string(),
        detail: "NotReadableError".to_string(),
    });

    let ui = session.presenter().ui();
    assert_eq!(*session.state(), SessionState::Idle);
    assert_eq!(session.selected_file(), None);
    assert_eq!(ui.file_name.as_deref(), Some("scan2.png"));
    assert_eq!(ui.preview, None);
    assert!(!ui.submit_enabled);
    assert_eq!(ui.error.as_deref(), Some("Error: Could not read 'scan2.png'. Please try again."));
    assert!(session.submit_requested().is_none());

    // Picking a readable file recovers.
    session.file_chosen(Some(scan1()));
    assert_eq!(session.presenter().ui().error, None);
    assert!(session.submit_requested().is_some());
}
