//! Domain models for the upload/classify session.
//!
//! - [`SelectedFile`] - The image payload chosen by the user
//! - [`ClassificationResult`] - Predicted class and confidence
//! - [`SeverityTier`] - Presentation tier derived from the class label

use serde::{Deserialize, Serialize};

// =============================================================================
// Selected File
// =============================================================================

/// An image picked by the user, awaiting or having been submitted.
///
/// Immutable once constructed: a new selection replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    mime_type: Option<String>,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Create a file from its display name and raw payload.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            bytes,
        }
    }

    /// Attach the MIME type reported by the browser.
    ///
    /// Blank values are dropped so that sniffing can take over.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        self.mime_type = if mime_type.trim().is_empty() {
            None
        } else {
            Some(mime_type)
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// =============================================================================
// Classification Result
// =============================================================================

/// Labels emitted by the reference model, in training order.
///
/// Informational only: [`SeverityTier::from_class`] accepts any string.
pub const KNOWN_CLASSES: [&str; 4] = [
    "MildDemented",
    "ModerateDemented",
    "NonDemented",
    "VeryMildDemented",
];

/// Whether the label is one the reference model is known to emit.
pub fn is_known_class(predicted_class: &str) -> bool {
    KNOWN_CLASSES.iter().any(|known| *known == predicted_class)
}

/// Outcome of a successful classification round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Predicted class label, exactly as returned by the service.
    #[serde(rename = "class")]
    pub predicted_class: String,
    /// Confidence in `[0.0, 1.0]`.
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(predicted_class: impl Into<String>, confidence: f64) -> Self {
        Self {
            predicted_class: predicted_class.into(),
            confidence,
        }
    }

    /// Severity tier of the predicted class.
    pub fn severity(&self) -> SeverityTier {
        SeverityTier::from_class(&self.predicted_class)
    }
}

// =============================================================================
// Severity Tier
// =============================================================================

/// Styling tier applied to the predicted class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    /// No dementia detected.
    Informational,
    /// Very mild or mild dementia.
    Warning,
    /// Anything else, including labels we do not recognise.
    Severe,
}

impl SeverityTier {
    /// Classify a label. Exact, case-sensitive match; total over all strings.
    pub fn from_class(predicted_class: &str) -> Self {
        match predicted_class {
            "NonDemented" => SeverityTier::Informational,
            "VeryMildDemented" | "MildDemented" => SeverityTier::Warning,
            _ => SeverityTier::Severe,
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            SeverityTier::Informational => "info",
            SeverityTier::Warning => "warning",
            SeverityTier::Severe => "error",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
