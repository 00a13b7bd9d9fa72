//! HTTP service for the classification endpoint.

use gloo_net::http::Request;
use neuroscan::{
    interpret_response, ClassificationResult, ClassifyError, ClassifyResult, HealthResponse,
    SelectedFile, FILE_FIELD,
};
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::js_error;

/// Build the multipart body: one `file` field carrying the payload.
fn build_form_data(file: &SelectedFile) -> Result<FormData, String> {
    let form_data = FormData::new().map_err(|e| format!("Failed to create FormData: {}", js_error(e)))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes()));

    let options = BlobPropertyBag::new();
    if let Some(mime) = file.mime_type() {
        options.set_type(mime);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create Blob: {}", js_error(e)))?;

    form_data
        .append_with_blob_and_filename(FILE_FIELD, &blob, file.name())
        .map_err(|e| format!("Failed to append file: {}", js_error(e)))?;

    Ok(form_data)
}

/// POST a file to the classification endpoint.
///
/// Transport problems become [`ClassifyError::Transport`]; everything the
/// server sends back is judged by [`interpret_response`].
pub async fn classify_image(file: &SelectedFile, url: &str) -> ClassifyResult<ClassificationResult> {
    let form_data = build_form_data(file).map_err(ClassifyError::Transport)?;

    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| ClassifyError::Transport(format!("Failed to build request: {}", e)))?;

    log::info!("📤 Uploading '{}' ({} bytes) to {}", file.name(), file.len(), url);

    let response = request.send().await.map_err(|e| {
        log::error!("Fetch error: {}", e);
        ClassifyError::Transport(format!("HTTP request failed: {}", e))
    })?;

    let status = response.status();
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Could not read response body ({}): {}", status, e);
            String::new()
        }
    };

    let outcome = interpret_response(status, &body);
    if let Err(ClassifyError::Malformed(detail)) = &outcome {
        log::error!("Malformed response ({}): {}", status, detail);
    }
    outcome
}

/// Probe the service root. Any 2xx counts as reachable.
pub async fn check_health(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error ({})", response.status()));
    }

    // A plain-text or empty body still means the service is up.
    Ok(response
        .json::<HealthResponse>()
        .await
        .map(|health| health.message)
        .unwrap_or_else(|_| "online".to_string()))
}
