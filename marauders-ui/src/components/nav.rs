//! Navigation Component
//!
//! Header navigation bar with brand and one link per named route.

use leptos::*;
use leptos_router::*;
use marauders::router::RouteTarget;
use std::rc::Rc;

use crate::routing::AppRouter;

/// `(href, label)` for every named page route, in table order
pub fn nav_links(router: &AppRouter) -> Vec<(String, String)> {
    router
        .table()
        .records()
        .iter()
        .filter(|r| matches!(r.target, RouteTarget::Page(_)) && r.name.is_some())
        .map(|r| {
            let label = r
                .meta
                .as_ref()
                .map(|m| m.title.clone())
                .unwrap_or_else(|| r.pattern.to_string());
            (r.pattern.to_string(), label)
        })
        .collect()
}

/// Navigation header component
#[component]
pub fn Nav(router: Rc<AppRouter>) -> impl IntoView {
    let mut links = nav_links(&router);
    // The brand already links home.
    links.retain(|(href, _)| href != "/");

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-black border-bottom border-secondary">
            <div class="container">
                <A href="/" class="navbar-brand fw-bold">
                    {marauders::BRAND}
                </A>

                <div class="navbar-nav flex-wrap">
                    {links
                        .into_iter()
                        .map(|(href, label)| view! { <NavLink href=href label=label /> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    #[prop(into)]
    href: String,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="active">
            {label}
        </A>
    }
}
