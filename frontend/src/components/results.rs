//! Results panel: placeholder, spinner, error and prediction.

use leptos::*;

use crate::presenter::UiSignals;

#[component]
pub fn ResultsPanel(ui: UiSignals) -> impl IntoView {
    view! {
        <div class="results-panel">
            <Show
                when=move || ui.show_placeholder()
                fallback=|| view! { }
            >
                <p id="default-text" class="default-text">
                    "Upload an image to see the classification result."
                </p>
            </Show>

            <Show
                when=move || ui.busy.get()
                fallback=|| view! { }
            >
                <div id="spinner" class="spinner"></div>
            </Show>

            <Show
                when=move || ui.error.with(Option::is_some)
                fallback=|| view! { }
            >
                <p id="error-text" class="error-text">
                    {move || ui.error.get().unwrap_or_default()}
                </p>
            </Show>

            {move || ui.result.get().map(|result| {
                let width = result.indicator_width();
                view! {
                    <div id="results-area" class="results-area">
                        <h3>"Prediction"</h3>
                        <div id="prediction-box" class=result.label_class()>
                            {result.predicted_class.clone()}
                        </div>
                        <p id="confidence-text" class="confidence-text">
                            {result.confidence_text()}
                        </p>
                        <div class="progress-bar">
                            <div
                                id="progress-bar-fill"
                                class="progress-bar-fill"
                                style=format!("width: {};", width)
                            >
                                {width.clone()}
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
