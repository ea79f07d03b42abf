/*
[INPUT]:  Test configuration and mock transport requirements
[OUTPUT]: Shared test utilities, fixtures, and mock transports
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bybit-inverse-adapter tests

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bybit_inverse_adapter::{
    ApiResponse, ClientConfig, InverseClient, InverseError, Params, RequestTransport,
    RestClientOptions, Result,
};
use serde_json::json;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at a mock server, time sync disabled
pub fn mock_server_client(
    server: &MockServer,
    key: Option<&str>,
    secret: Option<&str>,
) -> InverseClient {
    let options = RestClientOptions {
        base_url: Some(server.uri()),
        disable_time_sync: true,
        ..Default::default()
    };
    InverseClient::new(
        key.map(str::to_string),
        secret.map(str::to_string),
        false,
        options,
        ClientConfig::default(),
    )
    .expect("client init")
}

/// Successful envelope used by the recording transport
pub fn ok_response() -> ApiResponse {
    serde_json::from_value(json!({
        "ret_code": 0,
        "ret_msg": "OK",
        "ext_code": "",
        "result": {},
        "time_now": "1700000000.000000"
    }))
    .expect("envelope")
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub verb: &'static str,
    pub path: String,
    pub params: Option<Params>,
}

/// Records every call and answers with a fixed envelope
#[derive(Debug)]
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    response: ApiResponse,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::with_response(ok_response())
    }

    pub fn with_response(response: ApiResponse) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn take_calls(&self) -> Vec<RecordedCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn record(
        &self,
        verb: &'static str,
        path: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            verb,
            path: path.to_string(),
            params,
        });
        Ok(self.response.clone())
    }
}

#[async_trait]
impl RequestTransport for RecordingTransport {
    async fn get(&self, path: &str, params: Option<Params>) -> Result<ApiResponse> {
        self.record("GET", path, params)
    }

    async fn post(&self, path: &str, params: Option<Params>) -> Result<ApiResponse> {
        self.record("POST", path, params)
    }
}

/// Rejects every call with a 503
#[derive(Debug, Default)]
pub struct FailingTransport {
    attempts: AtomicUsize,
}

impl FailingTransport {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn fail(&self) -> Result<ApiResponse> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(InverseError::Api {
            code: 503,
            message: "service unavailable".to_string(),
        })
    }
}

#[async_trait]
impl RequestTransport for FailingTransport {
    async fn get(&self, _path: &str, _params: Option<Params>) -> Result<ApiResponse> {
        self.fail()
    }

    async fn post(&self, _path: &str, _params: Option<Params>) -> Result<ApiResponse> {
        self.fail()
    }
}
