//! App Root Component
//!
//! Main application component: navigation, routed content, footer.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::components::Nav;
use crate::routing::{build_router, RouteOutlet};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let router = match build_router() {
        Ok(router) => Rc::new(router),
        Err(e) => {
            tracing::error!(error = %e, "invalid route table");
            return view! { <BrokenApp message=e.to_string() /> }.into_view();
        }
    };

    view! {
        <Router>
            <div class="min-vh-100 d-flex flex-column bg-dark text-light">
                <Nav router=Rc::clone(&router) />

                <main class="flex-grow-1 container py-4">
                    <RouteOutlet router=router />
                </main>

                <Footer />
            </div>
        </Router>
    }
    .into_view()
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-top border-secondary py-3">
            <div class="container text-center small text-secondary">
                {marauders::BRAND}
            </div>
        </footer>
    }
}

/// Shown only when the route table itself cannot be built
#[component]
fn BrokenApp(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="container py-5 text-center">
            <h1>{marauders::BRAND}</h1>
            <p class="text-danger">{message}</p>
        </div>
    }
}
