//! Common types used across the frontend application.
//!
//! Session and result types live in `neuroscan-core`; this module only holds
//! what is specific to the page.

// =============================================================================
// Endpoint Status
// =============================================================================

/// Reachability of the classification service, shown in the header.
///
/// Informational only: submission is never blocked on it.
#[derive(Clone, Debug, PartialEq)]
pub enum EndpointStatus {
    /// Probe still running
    Checking,
    /// Service answered; carries its greeting message
    Online(String),
    /// Probe failed; carries the reason
    Offline(String),
}

impl EndpointStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            EndpointStatus::Checking => "status-checking",
            EndpointStatus::Online(_) => "status-online",
            EndpointStatus::Offline(_) => "status-offline",
        }
    }

    /// Short badge label.
    pub fn label(&self) -> &'static str {
        match self {
            EndpointStatus::Checking => "Checking service…",
            EndpointStatus::Online(_) => "Service online",
            EndpointStatus::Offline(_) => "Service offline",
        }
    }

    /// Tooltip with the probe detail.
    pub fn detail(&self) -> String {
        match self {
            EndpointStatus::Checking => String::new(),
            EndpointStatus::Online(message) | EndpointStatus::Offline(message) => message.clone(),
        }
    }
}

impl From<Result<String, String>> for EndpointStatus {
    fn from(probe: Result<String, String>) -> Self {
        match probe {
            Ok(message) => EndpointStatus::Online(message),
            Err(reason) => EndpointStatus::Offline(reason),
        }
    }
}
