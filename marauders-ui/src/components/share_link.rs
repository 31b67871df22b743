//! Share Link Component
//!
//! Shows an absolute link reproducing the current calculator state.

use leptos::*;
use serde_json::Value;

use crate::state::share_href;

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Read-only field with the link to share
#[component]
pub fn ShareLink(
    /// Route path the link points at
    path: &'static str,
    #[prop(into)]
    state: Signal<Value>,
) -> impl IntoView {
    let href = move || {
        state.with(|s| share_href(path, s))
            .map(|href| format!("{}{}", origin(), href))
            .unwrap_or_default()
    };

    view! {
        <div class="input-group input-group-sm mt-3">
            <span class="input-group-text">"Link"</span>
            <input
                class="form-control font-monospace"
                readonly=true
                prop:value=href
                on:focus=|ev| event_target::<web_sys::HtmlInputElement>(&ev).select()
            />
        </div>
    }
}
