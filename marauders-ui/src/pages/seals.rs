//! Seals Calculator Page

use leptos::*;
use marauders::Page;

use super::calculator::CalculatorShell;

#[component]
pub fn SealsCalculator() -> impl IntoView {
    view! {
        <CalculatorShell
            page=Page::SealsCalculator
            subtitle="Quanti sigilli servono per arrivare all'obiettivo"
        />
    }
}
