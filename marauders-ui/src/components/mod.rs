//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;
pub mod share_link;

pub use loading::Loading;
pub use nav::Nav;
pub use share_link::ShareLink;
