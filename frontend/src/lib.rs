//! Legal Document AI Analysis - Frontend Rust/Leptos Application
//!
//! A WebAssembly client that uploads a PDF to the analysis backend and
//! shows the returned summary, risk level and named entities.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file input, submit, error)              │
//! │  ├── ResultSection (when an analysis succeeded)             │
//! │  └── HowItWorks (when no result and no error)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL resolution
//! - [`types`] - API types, risk levels and errors
//! - [`session`] - Upload session state machine
//! - [`view_model`] - Display helpers
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod session;
pub mod view_model;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AnalysisResult, Entity, ErrorBody,
    // Risk
    RiskLevel,
    // Errors
    AnalysisError, AppResult,
};

// Session
pub use session::{BrowserSession, CompletedAnalysis, Session, SessionPhase};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    init_logging();

    log::info!("🦀 Legal Document AI - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_environment();
    log::info!("🔗 Backend: {}", config.backend_url());
    provide_context(config);

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main class="app-main">
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let session = create_rw_signal(BrowserSession::new());

    view! {
        <div class="container">
            <Hero/>
            <UploadSection session=session/>
            <ResultSection session=session/>
            <HowItWorks session=session/>
        </div>

        <Footer/>
    }
}
