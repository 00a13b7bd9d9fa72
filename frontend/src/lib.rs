//! NeuroScan - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a brain MRI image and viewing the
//! class predicted by the classification service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (service status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadCard (picker, preview, submit)                   │
//! │  └── ResultsPanel (spinner, error, prediction)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The upload/classify logic lives in `neuroscan-core`; this crate only
//! wires browser events into an [`UploadSession`] and renders the
//! [`UiSignals`] it writes to.
//!
//! # Modules
//!
//! - [`types`] - Page-specific types (EndpointStatus)
//! - [`presenter`] - Signal-backed presenter
//! - [`components`] - UI components (Header, UploadCard, ResultsPanel, etc.)
//! - [`services`] - Classification endpoint and file reading

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use neuroscan::UploadSession;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod presenter;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::EndpointStatus;

// Presenter
pub use presenter::UiSignals;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application on `<body>`.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🧠 NeuroScan - Starting Leptos App (service: {})", API_BASE_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Page regions and the session that drives them
    let ui = UiSignals::new();
    let session = store_value(UploadSession::new(ui));

    // Probe the service once at startup
    let (endpoint_status, set_endpoint_status) = create_signal(EndpointStatus::Checking);
    spawn_local(async move {
        let probe = check_health(&health_url()).await;
        if let Err(e) = &probe {
            log::warn!("⚠️  Classification service unreachable: {}", e);
        }
        set_endpoint_status.set(EndpointStatus::from(probe));
    });

    view! {
        <Header status=endpoint_status/>

        <div class="container">
            <Hero/>

            <div class="workspace">
                <UploadCard session=session ui=ui/>
                <ResultsPanel ui=ui/>
            </div>
        </div>

        <Footer/>
    }
}
