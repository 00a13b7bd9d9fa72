//! Image upload card: file picker, preview and submit button.
//!
//! Browser events are turned into session events here; the one request the
//! session asks for is spawned here too.

use leptos::*;
use neuroscan::UploadSession;
use web_sys::Event;

use crate::presenter::UiSignals;
use crate::services::{classify_image, first_file, read_selected_file, PickerGeneration};
use crate::{predict_url, ACCEPTED_FILE_TYPES};

#[component]
pub fn UploadCard(
    /// Page-lifetime session
    session: StoredValue<UploadSession<UiSignals>>,
    /// Signals the session writes to
    ui: UiSignals,
) -> impl IntoView {
    let picks = store_value(PickerGeneration::default());

    let on_file_change = move |ev: Event| {
        // Every change invalidates reads still in flight.
        let ticket = picks.try_update_value(PickerGeneration::advance).unwrap_or_default();

        let Some(file) = first_file(&ev) else {
            session.update_value(|s| s.file_chosen(None));
            return;
        };

        spawn_local(async move {
            let read = read_selected_file(&file).await;

            if !picks.with_value(|p| p.is_current(ticket)) {
                log::debug!("Dropping read of '{}': a newer file was picked", file.name());
                return;
            }

            match read {
                Ok(selected) => session.update_value(|s| s.file_chosen(Some(selected))),
                Err(e) => session.update_value(|s| s.file_unreadable(e)),
            }
        });
    };

    let on_submit = move |_| {
        let Some(file) = session.try_update_value(|s| s.submit_requested()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = classify_image(&file, &predict_url()).await;
            match &outcome {
                Ok(result) => log::info!(
                    "✅ Classified '{}' as {} ({:.4})",
                    file.name(),
                    result.predicted_class,
                    result.confidence
                ),
                Err(e) => log::warn!("❌ Classification of '{}' failed: {}", file.name(), e),
            }
            session.update_value(|s| s.response_received(outcome));
        });
    };

    view! {
        <div class="upload-card">
            <label for="file-uploader" class="file-label">
                <span class="upload-icon">"🧠"</span>
                <span id="file-label-text">
                    {move || ui.file_name.get().unwrap_or_else(|| "Choose an MRI image".to_string())}
                </span>
            </label>
            <input
                type="file"
                id="file-uploader"
                accept=ACCEPTED_FILE_TYPES
                style="display:none"
                on:change=on_file_change
            />

            <Show
                when=move || ui.preview.with(Option::is_some)
                fallback=|| view! { }
            >
                <img
                    id="image-preview"
                    class="image-preview"
                    alt="Selected scan preview"
                    src=move || ui.preview.get().unwrap_or_default()
                />
            </Show>

            <button
                id="classify-btn"
                class="classify-button"
                disabled=move || !ui.submit_enabled.get()
                on:click=on_submit
            >
                "Classify Image"
            </button>
        </div>
    }
}
