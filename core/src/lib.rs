//! # NeuroScan core - upload, classify, display
//!
//! Target-independent half of the NeuroScan client: the data model, the
//! classification service contract and the session state machine that the
//! web frontend drives.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  Event   ┌──────────────┐  Effect  ┌─────────────┐
//! │  UI events  │─────────▶│  transition  │─────────▶│  Presenter  │
//! │ (file, btn) │          │   (pure fn)  │          │ (UI regions)│
//! └─────────────┘          └──────────────┘          └─────────────┘
//!        ▲                        │ Classify(file)
//!        │  ResponseReceived      ▼
//!        └────────────────── HTTP transport (frontend)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use neuroscan::{interpret_response, RecordingPresenter, SelectedFile, UploadSession};
//!
//! let mut session = UploadSession::new(RecordingPresenter::default());
//! session.file_chosen(Some(SelectedFile::new("scan1.png", b"\x89PNG\r\n\x1a\n".to_vec())));
//!
//! if let Some(_file) = session.submit_requested() {
//!     // POST the file, then report the raw status and body back.
//!     let outcome = interpret_response(500, r#"{"error": "model unavailable"}"#);
//!     session.response_received(outcome);
//! }
//!
//! assert_eq!(
//!     session.presenter().ui().error.as_deref(),
//!     Some("Error: model unavailable. Please try again.")
//! );
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Classification error taxonomy
//! - [`models`] - SelectedFile, ClassificationResult, SeverityTier
//! - [`preview`] - Data-URL preview encoding
//! - [`display`] - Result formatting
//! - [`api`] - Service contract and response interpretation
//! - [`session`] - State machine, presenter port, driver

// Core modules
pub mod error;
pub mod models;

// Presentation helpers
pub mod preview;
pub mod display;

// Service contract
pub mod api;

// State machine
pub mod session;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ClassifyError, ClassifyResult, FileError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{is_known_class, ClassificationResult, SelectedFile, SeverityTier, KNOWN_CLASSES};

// =============================================================================
// Re-exports - Display
// =============================================================================

pub use display::{format_percent, ResultView};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::{
    endpoint_url,
    interpret_response,
    HealthResponse,
    PredictResponse,
    FILE_FIELD,
    HEALTH_PATH,
    PREDICT_PATH,
};

// =============================================================================
// Re-exports - Session
// =============================================================================

pub use session::{
    transition,
    Effect,
    Event,
    Model,
    Presenter,
    RecordingPresenter,
    SessionState,
    UiSnapshot,
    UploadSession,
};
