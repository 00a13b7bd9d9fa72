//! Browser file access.

use neuroscan::{FileError, SelectedFile};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

/// Readable message for a JavaScript exception.
pub fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// First file of a file-input `change` event, if any.
pub fn first_file(ev: &Event) -> Option<File> {
    let input: HtmlInputElement = leptos::event_target(ev);
    input.files().and_then(|files| files.get(0))
}

/// Counts file-picker changes so that a read finishing after a newer pick
/// is dropped instead of overwriting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerGeneration(u64);

impl PickerGeneration {
    /// Register a new pick and return its ticket.
    pub fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Whether `ticket` belongs to the latest pick.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Read a browser `File` fully into memory.
pub async fn read_selected_file(file: &File) -> Result<SelectedFile, FileError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| FileError::Unreadable {
            name: file.name(),
            detail: js_error(e),
        })?;

    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), bytes).with_mime_type(file.type_()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_pick_is_current() {
        let mut picks = PickerGeneration::default();
        let large = picks.advance();
        let small = picks.advance();

        // The second pick's read lands first and is kept.
        assert!(picks.is_current(small));
        // The first pick's read lands afterwards and is dropped.
        assert!(!picks.is_current(large));
    }

    #[test]
    fn test_cleared_picker_invalidates_pending_read() {
        let mut picks = PickerGeneration::default();
        let pending = picks.advance();
        picks.advance();
        assert!(!picks.is_current(pending));
    }
}
