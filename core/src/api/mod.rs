//! Classification service contract.
//!
//! Paths, form field names and response interpretation shared by every
//! transport that talks to the service.

pub mod types;

pub use types::*;

/// Classification route, relative to the service base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Health route, relative to the service base URL.
pub const HEALTH_PATH: &str = "/";

/// Multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

/// Join a base URL and a route without doubling or dropping the slash.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joining() {
        assert_eq!(endpoint_url("http://localhost:5000", PREDICT_PATH), "http://localhost:5000/predict");
        assert_eq!(endpoint_url("http://localhost:5000/", PREDICT_PATH), "http://localhost:5000/predict");
        assert_eq!(endpoint_url("https://api.example.org/v1", "predict"), "https://api.example.org/v1/predict");
        assert_eq!(endpoint_url("http://localhost:5000", HEALTH_PATH), "http://localhost:5000/");
    }
}
