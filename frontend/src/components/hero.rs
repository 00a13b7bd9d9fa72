//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Alzheimer's MRI Classifier"</h1>
            <p class="subtitle">
                "Upload a brain MRI slice to estimate its dementia stage. "
                "Results are indicative only and are not a medical diagnosis."
            </p>
        </div>
    }
}
