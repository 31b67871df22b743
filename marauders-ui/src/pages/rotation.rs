//! Shop Rotation Page
//!
//! Current shop rotation, read from a static JSON data file.

use leptos::*;
use marauders::{LoadError, Page};
use serde::Deserialize;

use super::PageHeader;
use crate::api::{load_json, ROTATION_DATA};
use crate::components::Loading;

/// One item in the current rotation
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RotationItem {
    pub nome: String,
    #[serde(default)]
    pub costo: Option<u32>,
}

#[component]
pub fn ShopRotation() -> impl IntoView {
    let items = create_local_resource(
        || (),
        |_| async move { load_json::<Vec<RotationItem>>(ROTATION_DATA).await },
    );

    view! {
        <div>
            <PageHeader page=Page::ShopRotation subtitle="Cosa offre il negozio in questo turno" />

            <Suspense fallback=|| view! { <Loading /> }>
                {move || items.get().map(render_items)}
            </Suspense>
        </div>
    }
}

fn render_items(result: Result<Vec<RotationItem>, LoadError>) -> View {
    match result {
        Ok(items) if items.is_empty() => view! {
            <p class="text-secondary">"Nessun articolo in rotazione."</p>
        }
        .into_view(),
        Ok(items) => view! {
            <ul class="list-group">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <li class="list-group-item d-flex justify-content-between">
                            <span>{item.nome}</span>
                            <span class="text-secondary">
                                {item.costo.map(|c| c.to_string()).unwrap_or_else(|| "–".to_string())}
                            </span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        Err(e) => {
            tracing::error!(path = ROTATION_DATA, error = %e, "rotation data unavailable");
            view! { <div class="alert alert-danger">{e.to_string()}</div> }.into_view()
        }
    }
}
