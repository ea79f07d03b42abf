/*
[INPUT]:  Endpoint path and serialized parameter map
[OUTPUT]: Parsed response envelope or transport error
[POS]:    HTTP layer - seam between the endpoint facade and the wire
[UPDATE]: When the request contract between facade and transport changes
*/

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::{InverseError, Result};
use crate::types::ApiResponse;

/// Request parameters keyed by wire field name
pub type Params = Map<String, Value>;

/// Issues one request per call and returns the decoded envelope.
///
/// `RequestWrapper` is the production implementation; tests substitute a
/// recording transport.
#[async_trait]
pub trait RequestTransport: Send + Sync {
    async fn get(&self, path: &str, params: Option<Params>) -> Result<ApiResponse>;

    async fn post(&self, path: &str, params: Option<Params>) -> Result<ApiResponse>;
}

#[async_trait]
impl<T: RequestTransport + ?Sized> RequestTransport for Box<T> {
    async fn get(&self, path: &str, params: Option<Params>) -> Result<ApiResponse> {
        (**self).get(path, params).await
    }

    async fn post(&self, path: &str, params: Option<Params>) -> Result<ApiResponse> {
        (**self).post(path, params).await
    }
}

/// Serialize a request struct into a parameter map
pub fn to_params<P: Serialize + ?Sized>(params: &P) -> Result<Params> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(InverseError::InvalidParams(format!(
            "parameters must serialize to an object, got {other}"
        ))),
    }
}
