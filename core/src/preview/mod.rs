//! Image preview encoding.
//!
//! Turns a [`SelectedFile`] into a `data:` URL the preview region can use as
//! an `<img src>`. Preview is best-effort: a payload we cannot identify as an
//! image simply yields no preview and never blocks submission.

use base64::Engine;

use crate::models::SelectedFile;

/// Magic-byte signatures for the image formats browsers render natively.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"BM", "image/bmp"),
];

/// Detect an image MIME type from the first bytes of a payload.
pub fn sniff_image_type(bytes: &[u8]) -> Option<&'static str> {
    // RIFF....WEBP
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    SIGNATURES
        .iter()
        .find(|(magic, _)| bytes.starts_with(magic))
        .map(|(_, mime)| *mime)
}

/// Resolve the MIME type to advertise in the preview URL.
///
/// A browser-reported `image/*` type wins; anything else falls back to
/// sniffing the payload.
pub fn preview_mime_type(file: &SelectedFile) -> Option<String> {
    match file.mime_type() {
        Some(mime) if mime.starts_with("image/") => Some(mime.to_string()),
        _ => sniff_image_type(file.bytes()).map(str::to_string),
    }
}

/// Encode the file as `data:<mime>;base64,<payload>`.
pub fn data_url(file: &SelectedFile) -> Option<String> {
    if file.is_empty() {
        return None;
    }

    let Some(mime) = preview_mime_type(file) else {
        log::debug!("No preview for '{}': unrecognised image type", file.name());
        return None;
    };

    let b64 = base64::engine::general_purpose::STANDARD.encode(file.bytes());
    Some(format!("data:{};base64,{}", mime, b64))
}

impl SelectedFile {
    /// Preview URL for this file, if it looks like an image.
    pub fn preview_data_url(&self) -> Option<String> {
        data_url(self)
    }
}
