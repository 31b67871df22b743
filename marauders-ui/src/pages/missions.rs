//! Missions Recap Page

use leptos::*;
use marauders::Page;

use super::calculator::CalculatorShell;

#[component]
pub fn MissionsRecap() -> impl IntoView {
    view! {
        <CalculatorShell
            page=Page::MissionsRecap
            subtitle="Riepilogo delle missioni e delle ricompense"
        />
    }
}
