//! "How it works" panel.

use leptos::*;

use crate::session::BrowserSession;
use crate::view_model::{shows_info_panel, HOW_IT_WORKS};

#[component]
pub fn HowItWorks(session: RwSignal<BrowserSession>) -> impl IntoView {
    view! {
        <Show
            when=move || session.with(|s| shows_info_panel(s.phase()))
            fallback=|| view! { }
        >
            <div class="info-section">
                <h3>"How it works:"</h3>
                <ol>
                    {HOW_IT_WORKS
                        .iter()
                        .map(|step| view! { <li>{*step}</li> })
                        .collect_view()}
                </ol>
            </div>
        </Show>
    }
}
