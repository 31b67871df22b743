//! ITALIAN MARAUDERS
//!
//! Community calculators built with Leptos (WASM).
//!
//! # Pages
//!
//! - Seals calculator
//! - Shop spending calculator
//! - Missions recap
//! - Shop rotation
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. Browser history and links
//! come from `leptos_router`; path resolution, lazy page loading and the
//! document title come from the shared `marauders` route table.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod routing;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route tracing events (router, state codec) to the browser console
    tracing_wasm::set_as_global_default();
    tracing::info!("ITALIAN MARAUDERS client starting");

    mount_to_body(|| view! { <app::App /> });
}
