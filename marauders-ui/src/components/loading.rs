//! Loading Component

use leptos::*;

/// Full-page loading spinner, shown while a page resolves
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="d-flex justify-content-center py-5">
            <div class="spinner-border text-warning" role="status">
                <span class="visually-hidden">"Caricamento..."</span>
            </div>
        </div>
    }
}
