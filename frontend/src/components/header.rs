//! Header with the service status badge.

use leptos::*;

use crate::{EndpointStatus, APP_NAME};

#[component]
pub fn Header(status: ReadSignal<EndpointStatus>) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <div
                    class=move || format!("service-status {}", status.get().css_class())
                    title=move || status.get().detail()
                >
                    <span class="status-dot"></span>
                    <span>{move || status.get().label()}</span>
                </div>
            </div>
        </header>
    }
}
