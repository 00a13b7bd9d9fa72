//! Application configuration.
//!
//! Centralized configuration for the NeuroScan frontend. The service address
//! defaults to a local development server and can be overridden at build
//! time with `NEUROSCAN_API_URL=https://... trunk build`.

use neuroscan::{endpoint_url, HEALTH_PATH, PREDICT_PATH};

/// Default classification service base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Classification service base URL.
pub const API_BASE_URL: &str = match option_env!("NEUROSCAN_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

/// Application name shown in the header and page title.
pub const APP_NAME: &str = "NeuroScan";

/// `accept` attribute of the file picker.
pub const ACCEPTED_FILE_TYPES: &str = "image/*";

/// Full URL of the classification route.
pub fn predict_url() -> String {
    endpoint_url(API_BASE_URL, PREDICT_PATH)
}

/// Full URL of the health route.
pub fn health_url() -> String {
    endpoint_url(API_BASE_URL, HEALTH_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_share_base() {
        assert!(predict_url().starts_with(API_BASE_URL.trim_end_matches('/')));
        assert!(predict_url().ends_with("/predict"));
        assert!(!predict_url().contains("//predict"));
        assert!(health_url().ends_with('/'));
    }
}
