//! Footer component

use leptos::*;

use crate::API_BASE_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <span class="footer-link">"Endpoint: " {API_BASE_URL}</span>
            </div>
        </footer>
    }
}
