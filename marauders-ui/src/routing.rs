//! Routing
//!
//! Binds the shared route table to Leptos: page factories, the document title
//! hook and the outlet that mounts whatever the current location resolves to.

use leptos::*;
use leptos_router::*;
use marauders::router::{install_title_hook, Navigation, Router, RouterError, RouterResult, TitleSink};
use marauders::{app_routes, Page};
use std::rc::Rc;

use crate::components::Loading;
use crate::pages;

/// Handle to a mountable page
#[derive(Clone, Copy)]
pub struct PageView(fn() -> View);

impl PageView {
    pub fn render(self) -> View {
        (self.0)()
    }
}

/// Router specialised to Leptos pages
pub type AppRouter = Router<PageView>;

/// Page constructor for each route
pub fn page_view(page: Page) -> PageView {
    match page {
        Page::Home => PageView(|| view! { <pages::Home /> }.into_view()),
        Page::SealsCalculator => PageView(|| view! { <pages::SealsCalculator /> }.into_view()),
        Page::ShopCalculator => PageView(|| view! { <pages::ShopCalculator /> }.into_view()),
        Page::MissionsRecap => PageView(|| view! { <pages::MissionsRecap /> }.into_view()),
        Page::ShopRotation => PageView(|| view! { <pages::ShopRotation /> }.into_view()),
    }
}

/// Writes titles to `document.title`
pub struct DocumentTitle;

impl TitleSink for DocumentTitle {
    fn set_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Build the router and register the title hook
pub fn build_router() -> RouterResult<AppRouter> {
    let table = app_routes(|page| async move { Ok(page_view(page)) })?;
    let router = Router::new(table);
    install_title_hook(&router, Rc::new(DocumentTitle));
    Ok(router)
}

/// Path plus query and fragment, as the route table expects it
fn full_path(pathname: &str, search: &str, hash: &str) -> String {
    let mut path = pathname.to_string();
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        path.push('?');
        path.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        path.push('#');
        path.push_str(hash);
    }
    path
}

/// Mounts the page for the current browser location
#[component]
pub fn RouteOutlet(router: Rc<AppRouter>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let requested = create_memo(move |_| {
        full_path(
            &location.pathname.get(),
            &location.search.get(),
            &location.hash.get(),
        )
    });

    let resolved = create_local_resource(
        move || requested.get(),
        move |path| {
            let router = Rc::clone(&router);
            async move { router.navigate(&path).await }
        },
    );

    // Keep the address bar in step with redirects. The router answers the
    // replaced location as a duplicate, so hooks and titles run once.
    create_effect(move |_| {
        if let Some(Ok(nav)) = resolved.get() {
            if needs_address_update(&nav, &requested.get_untracked()) {
                navigate(
                    &nav.event.to.full_path,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    view! {
        <Suspense fallback=|| view! { <Loading /> }>
            {move || resolved.get().map(render_navigation)}
        </Suspense>
    }
}

/// A fresh redirect whose target is not yet in the address bar
fn needs_address_update<P>(nav: &Navigation<P>, address: &str) -> bool {
    nav.event.is_redirect() && !nav.duplicate && nav.event.to.full_path != address
}

fn render_navigation(result: Result<Navigation<PageView>, RouterError>) -> View {
    match result {
        Ok(nav) => nav.page.render(),
        Err(e) => {
            tracing::error!(error = %e, "navigation failed");
            view! {
                <div class="alert alert-danger">
                    <h2 class="h5">"Impossibile aprire la pagina"</h2>
                    <p class="mb-0">{e.to_string()}</p>
                </div>
            }
            .into_view()
        }
    }
}
