//! Shop Spending Calculator Page

use leptos::*;
use marauders::Page;

use super::calculator::CalculatorShell;

#[component]
pub fn ShopCalculator() -> impl IntoView {
    view! {
        <CalculatorShell
            page=Page::ShopCalculator
            subtitle="Pianifica le spese al negozio della gilda"
        />
    }
}
