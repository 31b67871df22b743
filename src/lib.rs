//! # ITALIAN MARAUDERS
//!
//! Shared core of the ITALIAN MARAUDERS community site: the client-side route
//! table, the shareable state codec and the JSON loader, plus the static host
//! that serves the built client.
//!
//! ## Modules
//!
//! - [`router`]: route records, first-match resolution, lazy pages, title hook
//! - [`pages`]: the site's pages and its route table
//! - [`state_codec`]: calculator state <-> link-safe token
//! - [`loader`]: JSON data file loader
//! - [`config`]: host configuration (feature `host`)
//! - [`server`]: static host with history-mode fallback (feature `host`)
//!
//! ## Quick Start
//!
//! ```rust
//! use marauders::pages::{app_routes, Page};
//! use marauders::router::Router;
//!
//! let router = Router::new(app_routes(|page| async move { Ok(page) }).unwrap());
//! let resolved = router.table().resolve("/lista-missioni").unwrap();
//! assert_eq!(resolved.name(), Some("missions"));
//!
//! let token = marauders::encode_state(&serde_json::json!({"sigilli": 120})).unwrap();
//! let state: serde_json::Value = marauders::decode_state(&token, serde_json::Value::Null);
//! assert_eq!(state["sigilli"], 120);
//! # let _ = Page::Home;
//! ```

pub mod loader;
pub mod pages;
pub mod router;
pub mod state_codec;

#[cfg(feature = "host")]
pub mod config;
#[cfg(feature = "host")]
pub mod server;

// Re-export top-level types for convenience
pub use loader::{LoadError, LoadResult};
#[cfg(feature = "host")]
pub use loader::JsonLoader;

pub use pages::{app_routes, Page};

pub use router::{
    format_title, install_title_hook, Location, NavigationEvent, PageLoadError, RouteMeta,
    RouteRecord, RouteTable, Router, RouterError, TitleSink, BRAND,
};

pub use state_codec::{decode_state, encode_state, try_decode_state, CodecError};

#[cfg(feature = "host")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
#[cfg(feature = "host")]
pub use server::{build_router, serve, HostState, ServerError};
