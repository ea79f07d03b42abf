/*
[INPUT]:  Exchange JSON response envelopes
[OUTPUT]: ApiResponse with an opaque result payload
[POS]:    Data layer - response envelope shared by every endpoint
[UPDATE]: When the envelope gains fields or changes encoding
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{InverseError, Result};

/// Envelope returned by every inverse REST endpoint.
///
/// `result` is left untyped; callers decode it for the endpoint they called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub ret_code: i64,
    #[serde(default)]
    pub ret_msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext_code: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub ext_info: Value,
    #[serde(default)]
    pub result: Value,
    /// Server time in seconds, as a decimal string
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_now: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_reset_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.ret_code == 0
    }

    /// Convert a non-zero `ret_code` into an error, yielding `result` otherwise
    pub fn into_result(self) -> Result<Value> {
        if self.is_success() {
            Ok(self.result)
        } else {
            Err(InverseError::Exchange {
                ret_code: self.ret_code,
                ret_msg: self.ret_msg,
            })
        }
    }

    /// Server time in milliseconds, parsed from `time_now`
    pub fn server_time_ms(&self) -> Result<Decimal> {
        let raw = self.time_now.as_deref().ok_or_else(|| {
            InverseError::InvalidResponse("response is missing time_now".to_string())
        })?;
        let seconds = Decimal::from_str(raw.trim()).map_err(|e| {
            InverseError::InvalidResponse(format!("invalid time_now {raw:?}: {e}"))
        })?;
        Ok(seconds * Decimal::ONE_THOUSAND)
    }
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(raw) => Ok(Some(raw)),
            Value::Number(num) => Ok(Some(num.to_string())),
            _ => Err(serde::de::Error::custom("time_now must be a string or number")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_deserializes_full_payload() {
        let value = json!({
            "ret_code": 0,
            "ret_msg": "OK",
            "ext_code": "",
            "ext_info": "",
            "result": [{"symbol": "BTCUSD", "price": "9487", "size": 336241, "side": "Buy"}],
            "time_now": "1567108756.834357",
            "rate_limit_status": 119,
            "rate_limit_reset_ms": 1567108756834i64,
            "rate_limit": 120
        });

        let response: ApiResponse = serde_json::from_value(value).expect("envelope");
        assert!(response.is_success());
        assert_eq!(response.time_now.as_deref(), Some("1567108756.834357"));
        assert_eq!(response.rate_limit, Some(120));
        assert_eq!(response.result[0]["symbol"], "BTCUSD");
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let response: ApiResponse = serde_json::from_value(json!({"ret_code": 0})).unwrap();
        assert_eq!(response.result, Value::Null);
        assert_eq!(response.time_now, None);
    }

    #[test]
    fn numeric_time_now_is_accepted() {
        let response: ApiResponse =
            serde_json::from_value(json!({"ret_code": 0, "time_now": 1700000000.5})).unwrap();
        assert_eq!(
            response.server_time_ms().unwrap(),
            Decimal::from_str("1700000000500").unwrap()
        );
    }

    #[test]
    fn server_time_ms_scales_seconds() {
        let response = ApiResponse {
            time_now: Some("1567108756.834357".to_string()),
            ..Default::default()
        };
        assert_eq!(
            response.server_time_ms().unwrap(),
            Decimal::from_str("1567108756834.357").unwrap()
        );
    }

    #[test]
    fn server_time_ms_rejects_missing_time() {
        let err = ApiResponse::default().server_time_ms().unwrap_err();
        assert!(matches!(err, InverseError::InvalidResponse(_)));
    }

    #[test]
    fn into_result_surfaces_exchange_rejection() {
        let response = ApiResponse {
            ret_code: 10001,
            ret_msg: "params error".to_string(),
            ..Default::default()
        };

        match response.into_result() {
            Err(InverseError::Exchange { ret_code, ret_msg }) => {
                assert_eq!(ret_code, 10001);
                assert_eq!(ret_msg, "params error");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
