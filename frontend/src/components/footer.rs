//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "Analysis is produced by an automated model and is not legal advice • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-version">"v" {env!("CARGO_PKG_VERSION")}</div>
        </footer>
    }
}
