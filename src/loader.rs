//! JSON Loader
//!
//! Single-attempt fetch of static JSON data files. No retry, no caching.
//! The error type is shared with the WASM client, which fetches through the
//! browser instead of `reqwest`.

use thiserror::Error;

/// Errors that can occur while loading a JSON file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Server answered with a non-2xx status
    #[error("Impossibile caricare {path} (HTTP {status})")]
    Http { path: String, status: u16 },

    /// Request never got a response
    #[error("Impossibile caricare {path}: {message}")]
    Network { path: String, message: String },

    /// Body was not valid JSON for the requested type
    #[error("Invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },
}

impl LoadError {
    /// Path of the resource that failed
    pub fn path(&self) -> &str {
        match self {
            LoadError::Http { path, .. }
            | LoadError::Network { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(feature = "host")]
pub use self::http::JsonLoader;

#[cfg(feature = "host")]
mod http {
    use reqwest::Client;
    use serde::de::DeserializeOwned;

    use super::{LoadError, LoadResult};

    /// Fetches JSON documents relative to a base URL
    #[derive(Debug, Clone)]
    pub struct JsonLoader {
        client: Client,
        base_url: String,
    }

    impl JsonLoader {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self::with_client(Client::new(), base_url)
        }

        pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
            let base_url = base_url.into().trim_end_matches('/').to_string();
            Self { client, base_url }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        /// Absolute URL for a path; absolute URLs pass through untouched
        pub fn url_for(&self, path: &str) -> String {
            if path.starts_with("http://") || path.starts_with("https://") {
                path.to_string()
            } else if path.starts_with('/') {
                format!("{}{}", self.base_url, path)
            } else {
                format!("{}/{}", self.base_url, path)
            }
        }

        /// Fetch `path` and parse the body as JSON
        pub async fn load_json<T: DeserializeOwned>(&self, path: &str) -> LoadResult<T> {
            let url = self.url_for(path);

            let response = self.client.get(&url).send().await.map_err(|e| {
                tracing::warn!(path = %path, error = %e, "JSON request failed");
                LoadError::Network {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(path = %path, status = status.as_u16(), "JSON load rejected");
                return Err(LoadError::Http {
                    path: path.to_string(),
                    status: status.as_u16(),
                });
            }

            let body = response.bytes().await.map_err(|e| LoadError::Network {
                path: path.to_string(),
                message: e.to_string(),
            })?;

            serde_json::from_slice(&body).map_err(|e| LoadError::Parse {
                path: path.to_string(),
                message: e.to_string(),
            })
        }
    }
}
