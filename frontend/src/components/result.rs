//! Analysis result card.

use leptos::*;

use crate::session::BrowserSession;
use crate::view_model::{ResultView, NO_ENTITIES_MESSAGE};

#[component]
pub fn ResultSection(session: RwSignal<BrowserSession>) -> impl IntoView {
    let on_reset = move |_| {
        log::info!("🔄 Analyze another document");
        session.update(|s| s.reset());
    };

    let result_view = move || session.with(|s| s.result().map(ResultView::from));

    view! {
        {move || result_view().map(|card| {
            let entities = match card.entity_list() {
                Some(entities) => view! {
                    <ul class="entities-list">
                        {entities
                            .iter()
                            .map(|entity| view! {
                                <li>
                                    <span class="entity-text">{entity.text.clone()}</span>
                                    <span class="entity-label">{entity.label.clone()}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }.into_view(),
                None => view! { <p>{NO_ENTITIES_MESSAGE}</p> }.into_view(),
            };

            view! {
                <div class="result-section">
                    <h2>"Analysis Results"</h2>

                    <div class="result-card">
                        <h3>"Document: " {card.filename.clone()}</h3>
                        <div class="result-meta">
                            "Analyzed at " {card.completed_at.clone()}
                            {card.document_id.clone().map(|id| view! {
                                <span class="result-id">" • ID: " {id}</span>
                            })}
                        </div>

                        <div class="result-item">
                            <h4>"Summary"</h4>
                            <p>{card.summary.clone()}</p>
                        </div>

                        <div class="result-item">
                            <h4>"Risk Level"</h4>
                            <div class=format!("risk-badge {}", card.risk_class)>
                                {card.risk_label.clone()}
                            </div>
                        </div>

                        <div class="result-item">
                            <h4>"Named Entities Detected"</h4>
                            {entities}
                        </div>

                        <button class="clear-btn" on:click=on_reset>
                            "Analyze Another Document"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
