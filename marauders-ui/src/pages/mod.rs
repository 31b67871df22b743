//! Pages
//!
//! Top-level page components for each route.

mod calculator;
pub mod home;
pub mod missions;
pub mod rotation;
pub mod seals;
pub mod shop;

pub use home::Home;
pub use missions::MissionsRecap;
pub use rotation::ShopRotation;
pub use seals::SealsCalculator;
pub use shop::ShopCalculator;

use leptos::*;

/// Title block shared by every page
#[component]
pub fn PageHeader(
    page: marauders::Page,
    #[prop(into)]
    subtitle: String,
) -> impl IntoView {
    view! {
        <header class="mb-4">
            <h1 class="h2 fw-bold">{page.title()}</h1>
            <p class="text-secondary mb-0">{subtitle}</p>
        </header>
    }
}
