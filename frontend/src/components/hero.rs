//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">"Upload PDF documents for intelligent legal analysis"</p>
        </header>
    }
}
