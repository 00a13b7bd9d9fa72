//! Error types for the classification round trip.
//!
//! Every failure the session can surface is a [`ClassifyError`]:
//!
//! - [`ClassifyError::Logical`] - the service answered 2xx with an `error` field
//! - [`ClassifyError::Http`] - non-2xx status, optionally with a server message
//! - [`ClassifyError::Transport`] - the request never completed
//! - [`ClassifyError::Malformed`] - 2xx with a body we cannot use
//!
//! A missing file is not an error: the session ignores the event. A file
//! the browser cannot read is a [`FileError`].

use thiserror::Error;

// =============================================================================
// Classification Errors
// =============================================================================

/// Errors produced by a classification attempt.
///
/// The `Display` output is the bare message shown between `Error: ` and
/// `. Please try again.`; use [`ClassifyError::user_message`] for the full text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// Success status, but the payload carried an explicit error.
    #[error("{0}")]
    Logical(String),

    /// Non-success HTTP status.
    #[error("{}", http_message(.status, .message))]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// The request could not complete (DNS, CORS, connection refused...).
    ///
    /// The inner detail is kept for logs only.
    #[error("Could not reach the classification service")]
    Transport(String),

    /// Success status with a body that is not a classification result.
    #[error("Unexpected response from the classification service")]
    Malformed(String),
}

fn http_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(msg) => msg.clone(),
        None => format!("HTTP error! status: {}", status),
    }
}

impl ClassifyError {
    /// Text written to the error region.
    pub fn user_message(&self) -> String {
        format!("Error: {}. Please try again.", self)
    }

    /// Diagnostic detail for logging, if any beyond the display text.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClassifyError::Transport(detail) | ClassifyError::Malformed(detail) => Some(detail),
            _ => None,
        }
    }
}

// =============================================================================
// File Errors
// =============================================================================

/// Errors while turning a picked file into a payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FileError {
    /// The browser refused to hand over the file contents.
    #[error("Could not read '{name}'")]
    Unreadable { name: String, detail: String },
}

impl FileError {
    /// Text written to the error region.
    pub fn user_message(&self) -> String {
        format!("Error: {}. Please try again.", self)
    }

    /// Name of the file that failed.
    pub fn file_name(&self) -> &str {
        match self {
            FileError::Unreadable { name, .. } => name,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for a classification attempt.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_prefers_server_message() {
        let err = ClassifyError::Http {
            status: 500,
            message: Some("model unavailable".into()),
        };
        assert_eq!(err.user_message(), "Error: model unavailable. Please try again.");
    }

    #[test]
    fn test_http_error_falls_back_to_status() {
        let err = ClassifyError::Http {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(
            err.user_message(),
            "Error: HTTP error! status: 404. Please try again."
        );
    }

    #[test]
    fn test_transport_detail_is_not_displayed() {
        let err = ClassifyError::Transport("TypeError: Failed to fetch".into());
        assert!(!err.user_message().contains("TypeError"));
        assert!(err.user_message().ends_with("Please try again."));
        assert_eq!(err.detail(), Some("TypeError: Failed to fetch"));
    }

    #[test]
    fn test_logical_error_format() {
        let err = ClassifyError::Logical("Failed to process image".into());
        assert_eq!(
            err.user_message(),
            "Error: Failed to process image. Please try again."
        );
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_malformed_detail_kept_for_logs() {
        let err = ClassifyError::Malformed("missing 'class' field".into());
        assert_eq!(err.detail(), Some("missing 'class' field"));
        assert!(!err.user_message().contains("missing"));
    }

    #[test]
    fn test_unreadable_file_message() {
        let err = FileError::Unreadable {
            name: "scan2.png".into(),
            detail: "NotReadableError".into(),
        };
        assert_eq!(err.file_name(), "scan2.png");
        assert_eq!(err.user_message(), "Error: Could not read 'scan2.png'. Please try again.");
    }
}
