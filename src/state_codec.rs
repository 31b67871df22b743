//! Shareable State Tokens
//!
//! Calculator state travels in links as an opaque token:
//! JSON text, percent-encoded with the `encodeURIComponent` alphabet, then
//! base64 (standard alphabet, padded). Tokens produced by the browser's
//! `btoa(encodeURIComponent(JSON.stringify(obj)))` decode here and vice versa.
//!
//! Floats survive the trip bit for bit: `serde_json` is built with
//! `float_roundtrip`, matching what `JSON.parse` gives the browser.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Standard alphabet, accepting tokens with or without padding
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Everything `encodeURIComponent` escapes: all but ASCII alphanumerics and
/// `-_.!~*'()`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Errors from encoding or (strict) decoding a token
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Base64 decoded to bytes that are not text
    #[error("Token payload is not text: {0}")]
    Payload(#[from] std::string::FromUtf8Error),

    #[error("Invalid percent-encoding: {0}")]
    Percent(String),

    #[error("Invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
}

/// Encode any serializable value into a link-safe token
pub fn encode_state<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    let json = serde_json::to_string(value).map_err(CodecError::Serialize)?;
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    Ok(STANDARD.encode(escaped.as_bytes()))
}

/// Decode a token, reporting which stage failed
pub fn try_decode_state<T: DeserializeOwned>(token: &str) -> Result<T, CodecError> {
    let compact: String = token.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = LENIENT.decode(compact.as_bytes())?;
    let escaped = String::from_utf8(bytes)?;
    let json = decode_uri_component(&escaped)?;
    serde_json::from_str(&json).map_err(CodecError::Json)
}

/// Decode a token, returning `fallback` on any failure
pub fn decode_state<T: DeserializeOwned>(token: &str, fallback: T) -> T {
    match try_decode_state(token) {
        Ok(value) => value,
        Err(e) => {
            if !token.is_empty() {
                tracing::debug!(error = %e, "discarding unreadable state token");
            }
            fallback
        }
    }
}

/// Strict inverse of `encodeURIComponent`: every `%` must be followed by two
/// hex digits and the result must be UTF-8.
fn decode_uri_component(input: &str) -> Result<String, CodecError> {
    let bytes = input.as_bytes();
    for (i, _) in input.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .map(|pair| pair.iter().all(u8::is_ascii_hexdigit))
            .unwrap_or(false);
        if !valid {
            return Err(CodecError::Percent(format!("bad escape at offset {}", i)));
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| CodecError::Percent(format!("escapes do not form UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct ShopState {
        budget: u32,
        items: Vec<String>,
    }

    #[test]
    fn test_round_trip_struct() {
        let state = ShopState {
            budget: 1500,
            items: vec!["Pergamena".to_string(), "Sigillo d'oro".to_string()],
        };
        let token = encode_state(&state).unwrap();
        let fallback = ShopState {
            budget: 0,
            items: vec![],
        };
        assert_eq!(decode_state(&token, fallback), state);
    }

    #[test]
    fn test_round_trip_unicode_and_nesting() {
        let value = json!({
            "nome": "Città – ñ 🗡",
            "livelli": [1, 2.5, null, true],
            "nested": {"a": {"b": []}}
        });
        let token = encode_state(&value).unwrap();
        assert_eq!(decode_state(&token, Value::Null), value);
    }

    #[test]
    fn test_matches_browser_encoding() {
        // btoa(encodeURIComponent(JSON.stringify({a:1})))
        assert_eq!(encode_state(&json!({"a": 1})).unwrap(), "JTdCJTIyYSUyMiUzQTElN0Q=");
        assert_eq!(
            decode_state("JTdCJTIyYSUyMiUzQTElN0Q=", Value::Null),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_token_is_link_safe_ascii() {
        let token = encode_state(&json!({"q": "a b&c=d/é"})).unwrap();
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"+/=".contains(&b)));
    }

    #[test]
    fn test_missing_padding_accepted() {
        assert_eq!(
            decode_state("JTdCJTIyYSUyMiUzQTElN0Q", Value::Null),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_malformed_tokens_fall_back() {
        let fallback = json!({"default": true});
        // not base64
        assert_eq!(decode_state("***", fallback.clone()), fallback);
        // empty
        assert_eq!(decode_state("", fallback.clone()), fallback);
        // base64 of "%zz"
        assert_eq!(decode_state("JXp6", fallback.clone()), fallback);
        // base64 of "not json"
        assert_eq!(decode_state("bm90IGpzb24=", fallback.clone()), fallback);
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let token = encode_state(&json!(["not", "a", "struct"])).unwrap();
        let fallback = ShopState {
            budget: 7,
            items: vec![],
        };
        assert_eq!(decode_state(&token, fallback.clone()), fallback);
    }

    #[test]
    fn test_try_decode_reports_stage() {
        assert!(matches!(try_decode_state::<Value>("***"), Err(CodecError::Base64(_))));
        assert!(matches!(try_decode_state::<Value>("JXp6"), Err(CodecError::Percent(_))));
        assert!(matches!(
            try_decode_state::<Value>("bm90IGpzb24="),
            Err(CodecError::Json(_))
        ));
    }

    #[test]
    fn test_uri_component_alphabet() {
        let escape = |s: &str| utf8_percent_encode(s, URI_COMPONENT).to_string();
        assert_eq!(escape("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(escape("{\" :/}"), "%7B%22%20%3A%2F%7D");
        assert_eq!(escape("é"), "%C3%A9");
    }

    #[test]
    fn test_whitespace_inside_token_ignored() {
        assert_eq!(
            decode_state("JTdCJTIy YSUyMiUz\nQTElN0Q=", Value::Null),
            json!({"a": 1})
        );
        assert_eq!(
            decode_state("\tJTdCJTIyYSUyMiUzQTElN0Q=\r\n", Value::Null),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_escape_forming_invalid_utf8_falls_back() {
        // base64 of "%C3": a lone UTF-8 lead byte
        let fallback = json!({"default": true});
        assert_eq!(decode_state("JUMz", fallback.clone()), fallback);
        assert!(matches!(try_decode_state::<Value>("JUMz"), Err(CodecError::Percent(_))));
    }

    #[test]
    fn test_non_text_payload_reported_as_payload() {
        // base64 of the single byte 0xFF
        assert!(matches!(try_decode_state::<Value>("/w=="), Err(CodecError::Payload(_))));
        assert_eq!(decode_state("/w==", Value::Null), Value::Null);
    }

    #[test]
    fn test_floats_round_trip_exactly() {
        let known = [
            1.0715660391465826e-75,
            0.9090909090909091,
            0.1 + 0.2,
            f64::MIN_POSITIVE,
            f64::MAX,
            -5e-324,
        ];
        for x in known {
            let back: f64 = decode_state(&encode_state(&x).unwrap(), f64::NAN);
            assert_eq!(back.to_bits(), x.to_bits(), "{} came back as {}", x, back);
        }

        for i in 1..5000u32 {
            let i = f64::from(i);
            for x in [i / 3.0, i / 7.0, i / 1.1, i / 0.3] {
                let back: f64 = decode_state(&encode_state(&x).unwrap(), f64::NAN);
                assert_eq!(back.to_bits(), x.to_bits(), "{} came back as {}", x, back);
            }
        }
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            any::<u64>().prop_map(Value::from),
            any::<f64>()
                .prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
                .prop_map(Value::from),
            ".*".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map(".{0,8}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    /// Characters outside the base64 alphabet that are not whitespace
    fn non_base64_char() -> impl Strategy<Value = char> {
        prop::sample::select(vec!['!', '#', '$', '%', '&', '*', '-', '.', ':', '?', '@', '_', '~', 'é', '€', '🗡'])
    }

    proptest! {
        #[test]
        fn any_json_value_round_trips(value in arb_json()) {
            let token = encode_state(&value).unwrap();
            prop_assert_eq!(decode_state(&token, json!("fallback")), value);
        }

        #[test]
        fn any_finite_float_round_trips_bitwise(x in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
            let back: f64 = decode_state(&encode_state(&x).unwrap(), f64::NAN);
            prop_assert_eq!(back.to_bits(), x.to_bits());
        }

        #[test]
        fn non_base64_strings_fall_back(
            head in ".{0,16}",
            bad in non_base64_char(),
            tail in ".{0,16}",
        ) {
            let token = format!("{}{}{}", head, bad, tail);
            let fallback = json!({"fallback": true});
            prop_assert_eq!(decode_state(&token, fallback.clone()), fallback);
        }

        #[test]
        fn base64_of_non_json_falls_back(text in "[a-z ]{0,24}") {
            let token = STANDARD.encode(format!("x{}", text));
            let fallback = json!({"fallback": true});
            prop_assert_eq!(decode_state(&token, fallback.clone()), fallback);
        }
    }
}
