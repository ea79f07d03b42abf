/*
[INPUT]:  Request parameters and API secret
[OUTPUT]: Sorted parameter string and hex HMAC-SHA256 signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter serialization
*/

use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

use crate::http::Params;

type HmacSha256 = Hmac<Sha256>;

/// Signs request parameters for authenticated endpoints
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a new request signer with the given API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a serialized parameter string
    ///
    /// Returns lowercase hex HMAC-SHA256
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign `params` and return the payload that was signed with its signature
    pub fn sign_params(&self, params: &Params) -> (String, String) {
        let payload = serialize_params(params);
        let signature = self.sign(&payload);
        (payload, signature)
    }
}

/// Serialize params as `key=value` pairs sorted by key and joined by `&`
pub fn serialize_params(params: &Params) -> String {
    let mut pairs: Vec<(&String, &Value)> = params.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={}", param_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Render a primitive param the way it appears on the wire
pub fn param_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
