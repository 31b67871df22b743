//! JSON Data Client
//!
//! Single-attempt fetch through the browser, sharing the error type of the
//! native loader.

use gloo_net::http::Request;
use marauders::{LoadError, LoadResult};
use serde::de::DeserializeOwned;

/// Shop rotation data file
pub const ROTATION_DATA: &str = "/data/rotazione-negozio.json";

/// Fetch `path` and parse the body as JSON
pub async fn load_json<T: DeserializeOwned>(path: &str) -> LoadResult<T> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| LoadError::Network {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(LoadError::Http {
            path: path.to_string(),
            status: response.status(),
        });
    }

    response.json().await.map_err(|e| LoadError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}
