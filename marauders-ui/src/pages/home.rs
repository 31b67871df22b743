//! Home Page

use leptos::*;
use leptos_router::*;
use marauders::Page;

use super::PageHeader;

/// Landing page with one card per tool
#[component]
pub fn Home() -> impl IntoView {
    let tools = Page::ALL.into_iter().filter(|p| *p != Page::Home);

    view! {
        <div>
            <PageHeader page=Page::Home subtitle="Gli strumenti della gilda" />

            <div class="row g-3">
                {tools
                    .map(|page| view! {
                        <div class="col-12 col-md-6">
                            <A href=page.path() class="card h-100 bg-secondary-subtle text-decoration-none">
                                <div class="card-body">
                                    <h2 class="h5 card-title">{page.title()}</h2>
                                </div>
                            </A>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
