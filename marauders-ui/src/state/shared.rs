//! Shared Link State
//!
//! Calculator pages keep their state in the `s` query parameter as an
//! encoded token, so a link reproduces the same view.

use leptos::*;
use leptos_router::{use_query_map, ParamsMap};
use marauders::{decode_state, encode_state};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Query parameter holding the state token
pub const STATE_PARAM: &str = "s";

/// State from the current query, or `fallback` when absent or unreadable
pub fn restore_state<T: DeserializeOwned>(query: &ParamsMap, fallback: T) -> T {
    match query.get(STATE_PARAM) {
        Some(token) => decode_state(token, fallback),
        None => fallback,
    }
}

/// Calculator state seeded from the `s` parameter of the current URL.
/// Unreadable or missing tokens start from an empty object.
pub fn use_shared_state() -> RwSignal<Value> {
    let query = use_query_map();
    let initial = query.with_untracked(|q| restore_state(q, Value::Object(Map::new())));
    create_rw_signal(initial)
}

/// Whether the state carries anything worth showing
pub fn is_blank(state: &Value) -> bool {
    match state {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Relative link to `path` carrying `state`
pub fn share_href<T: Serialize + ?Sized>(path: &str, state: &T) -> Option<String> {
    match encode_state(state) {
        Ok(token) => Some(format!(
            "{}?{}={}",
            path,
            STATE_PARAM,
            urlencoding::encode(&token)
        )),
        Err(e) => {
            tracing::error!(error = %e, "cannot encode state");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_share_then_restore() {
        let state = json!({"budget": 900, "note": "a+b/c"});
        let href = share_href("/calcolatore-shop", &state).unwrap();
        assert!(href.starts_with("/calcolatore-shop?s="));

        let token = href.split_once("?s=").unwrap().1;
        let mut query = ParamsMap::new();
        query.insert(
            STATE_PARAM.to_string(),
            urlencoding::decode(token).unwrap().into_owned(),
        );
        assert_eq!(restore_state(&query, Value::Null), state);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&json!({})));
        assert!(is_blank(&Value::Null));
        assert!(!is_blank(&json!({"sigilli": 3})));
    }

    #[test]
    fn test_missing_or_bad_param_falls_back() {
        let fallback = json!({});
        assert_eq!(restore_state(&ParamsMap::new(), fallback.clone()), fallback);

        let mut query = ParamsMap::new();
        query.insert(STATE_PARAM.to_string(), "%%%".to_string());
        assert_eq!(restore_state(&query, fallback.clone()), fallback);
    }
}
