//! Request signing: HMAC-SHA1 over the canonical query string

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::application::{ApplicationError, ApplicationResult};

type HmacSha1 = Hmac<Sha1>;

/// Percent-encode a value the way the API server does before verifying.
///
/// Unreserved characters and `*` are kept, space becomes `%20`.
pub fn encode_value(value: &str) -> String {
    urlencoding::encode(value).replace("%2A", "*")
}

/// Canonical string to sign: sorted `key=encoded(value)` pairs joined by `&`, lowercased.
///
/// Pairs are sorted as whole strings, not by key.
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_value(value)))
        .collect();
    pairs.sort();
    pairs.join("&").to_lowercase()
}

/// Base64 HMAC-SHA1 signature of the canonical query under `secret`.
pub fn sign(params: &BTreeMap<String, String>, secret: &str) -> ApplicationResult<String> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .map_err(|e| ApplicationError::Signing(e.to_string()))?;
    mac.update(canonical_query(params).as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
