//! PDF upload form.
//!
//! Handles file selection, submission to the backend and the error message.

use leptos::*;
use web_sys::HtmlInputElement;

use crate::config::AppConfig;
use crate::services::analyze_document;
use crate::session::BrowserSession;
use crate::view_model::{file_label, submit_disabled, submit_label};

#[component]
pub fn UploadSection(session: RwSignal<BrowserSession>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let file_input = create_node_ref::<html::Input>();

    let is_submitting = move || session.with(|s| s.is_submitting());

    // Clear the native input once the session drops its file (success or reset)
    create_effect(move |_| {
        let has_file = session.with(|s| s.pending().is_some());
        if !has_file {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));

        match &file {
            Some(file) => log::info!("📄 Selected {} ({} bytes)", file.name(), file.size()),
            None => log::info!("📄 Selection cleared"),
        }

        let accepted = session.try_update(|s| s.select_file(file)).unwrap_or(false);
        if !accepted {
            log::warn!("⚠️ Selection ignored while an analysis is in flight");
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(file) = session.try_update(|s| s.begin_submit()).flatten() else {
            if let Some(message) = session.with_untracked(|s| s.failure().map(str::to_string)) {
                log::warn!("⚠️ Submission rejected: {}", message);
            }
            return;
        };

        let config = config.clone();
        spawn_local(async move {
            log::info!("📤 Uploading {} to {}", file.name(), config.upload_url());

            let outcome = analyze_document(&file, &config).await;
            match &outcome {
                Ok(result) => log::info!(
                    "✅ Analysis ready: {} entities, risk {}",
                    result.entities.len(),
                    result.risk_level
                ),
                Err(e) => log::error!("❌ Analysis failed: {:?}", e),
            }

            session.update(|s| s.finish(outcome));
        });
    };

    view! {
        <div class="upload-section">
            <form on:submit=on_submit>
                <div class="file-input-wrapper">
                    <input
                        type="file"
                        id="fileInput"
                        accept=".pdf"
                        node_ref=file_input
                        on:change=on_file_change
                        disabled=is_submitting
                    />
                    <label for="fileInput">
                        {move || session.with(|s| file_label(s.pending().map(|f| f.name())))}
                    </label>
                </div>

                <button
                    type="submit"
                    class="upload-btn"
                    disabled=move || session.with(|s| {
                        submit_disabled(s.is_submitting(), s.pending().is_some())
                    })
                >
                    {move || submit_label(is_submitting())}
                </button>
            </form>

            <Show
                when=move || session.with(|s| s.failure().is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    <p>"❌ " {move || session.with(|s| s.failure().unwrap_or_default().to_string())}</p>
                </div>
            </Show>
        </div>
    }
}
