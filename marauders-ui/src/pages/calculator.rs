//! Calculator Shell
//!
//! Common frame of the calculator pages: restored-state notice, share link
//! and reset.

use leptos::*;
use marauders::Page;
use serde_json::{Map, Value};

use super::PageHeader;
use crate::components::ShareLink;
use crate::state::{is_blank, use_shared_state};

#[component]
pub fn CalculatorShell(
    page: Page,
    #[prop(into)]
    subtitle: String,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let state = use_shared_state();
    let restored = state.with_untracked(|s| !is_blank(s));

    view! {
        <div>
            <PageHeader page=page subtitle=subtitle />

            {restored.then(|| view! {
                <div class="alert alert-info">"Stato ripristinato dal link condiviso"</div>
            })}

            {children.map(|c| c())}

            <section class="mt-4">
                <h2 class="h6 text-uppercase text-secondary">"Condividi"</h2>
                <ShareLink path=page.path() state=state />
                <button
                    class="btn btn-outline-light btn-sm mt-2"
                    disabled=move || state.with(is_blank)
                    on:click=move |_| state.set(Value::Object(Map::new()))
                >
                    "Reimposta"
                </button>
            </section>
        </div>
    }
}
