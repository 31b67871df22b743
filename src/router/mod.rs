//! Client-side routing
//!
//! Path-to-page resolution for the single-page client.
//!
//! ## Components
//!
//! - **RouteRecord**: path pattern, name, lazy page factory or redirect, meta
//! - **RouteTable**: ordered records, first match wins
//! - **Router**: current location, page cache, after-navigation hooks
//! - **title**: the hook that keeps the document title in sync

mod error;
mod navigator;
mod route;
mod table;
pub mod title;

pub use error::{PageLoadError, RouterError, RouterResult};
pub use navigator::{Location, Navigation, NavigationEvent, Router};
pub use route::{normalize_path, PageFactory, PathPattern, RouteMeta, RouteRecord, RouteTarget, CATCH_ALL};
pub use table::{RouteMatch, RouteTable};
pub use title::{format_title, install_title_hook, TitleSink, BRAND};
