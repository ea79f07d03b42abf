/*
[INPUT]:  Credentials, network selection, connectivity and HTTP options
[OUTPUT]: InverseClient facade owning one request transport
[POS]:    HTTP layer - client construction and shared dispatch helpers
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::http::{Params, RequestTransport, RequestWrapper, Result, to_params};
use crate::types::ApiResponse;

/// Base URLs for the inverse REST API
pub const LIVENET_BASE_URL: &str = "https://api.bybit.com";
pub const TESTNET_BASE_URL: &str = "https://api-testnet.bybit.com";

const API_KEY_ENV: &str = "BYBIT_API_KEY";
const API_SECRET_ENV: &str = "BYBIT_API_SECRET";

/// Resolve the REST host for livenet or testnet
pub fn base_url(livenet: bool) -> &'static str {
    if livenet {
        LIVENET_BASE_URL
    } else {
        TESTNET_BASE_URL
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Proxy URL applied to all requests
    pub proxy: Option<String>,
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            proxy: None,
            default_headers: HeaderMap::new(),
        }
    }
}

/// Exchange connectivity options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RestClientOptions {
    /// Window in ms during which a signed request stays valid
    #[serde(default = "default_recv_window")]
    pub recv_window: u64,
    /// How often to resync the clock offset with the server, in ms
    #[serde(default = "default_sync_interval_ms")]
    pub sync_interval_ms: u64,
    #[serde(default)]
    pub disable_time_sync: bool,
    /// Reject null parameters instead of dropping them
    #[serde(default)]
    pub strict_param_validation: bool,
    /// Replaces the livenet/testnet host, e.g. `https://api.bytick.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for RestClientOptions {
    fn default() -> Self {
        Self {
            recv_window: default_recv_window(),
            sync_interval_ms: default_sync_interval_ms(),
            disable_time_sync: false,
            strict_param_validation: false,
            base_url: None,
        }
    }
}

fn default_recv_window() -> u64 {
    5_000
}

fn default_sync_interval_ms() -> u64 {
    3_600_000
}

/// API key pair for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Pair an optional key and secret.
    ///
    /// Yields `None` unless both are present; requests are then sent unsigned.
    pub fn pair(key: Option<String>, secret: Option<String>) -> Option<Self> {
        match (non_empty(key), non_empty(secret)) {
            (Some(key), Some(secret)) => Some(Self { key, secret }),
            (None, None) => None,
            (key, _) => {
                warn!(
                    has_key = key.is_some(),
                    "API key and secret must both be set, private requests will be unsigned"
                );
                None
            }
        }
    }

    /// Read `BYBIT_API_KEY` / `BYBIT_API_SECRET`
    pub fn from_env() -> Option<Self> {
        Self::pair(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(API_SECRET_ENV).ok(),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Typed facade over the inverse REST endpoints.
///
/// Every endpoint method forwards its parameters to the owned transport and
/// returns the transport's result unchanged.
#[derive(Debug)]
pub struct InverseClient<T = RequestWrapper> {
    transport: T,
}

impl InverseClient<RequestWrapper> {
    /// Create a client for livenet or testnet.
    ///
    /// Without a key pair only public endpoints are usable.
    pub fn new(
        key: Option<String>,
        secret: Option<String>,
        livenet: bool,
        options: RestClientOptions,
        config: ClientConfig,
    ) -> Result<Self> {
        let credentials = Credentials::pair(key, secret);
        let host = options
            .base_url
            .clone()
            .unwrap_or_else(|| base_url(livenet).to_string());
        let transport = RequestWrapper::new(credentials, &host, options, config)?;
        Ok(Self::with_transport(transport))
    }

    /// Create an unauthenticated client with default options
    pub fn public(livenet: bool) -> Result<Self> {
        Self::new(
            None,
            None,
            livenet,
            RestClientOptions::default(),
            ClientConfig::default(),
        )
    }
}

impl<T: RequestTransport> InverseClient<T> {
    /// Create a client over an existing transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.transport.get(path, None).await
    }

    pub(crate) async fn get_with<P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<ApiResponse> {
        let params = to_params(params)?;
        self.transport.get(path, Some(params)).await
    }

    pub(crate) async fn get_raw(&self, path: &str, params: Params) -> Result<ApiResponse> {
        self.transport.get(path, Some(params)).await
    }

    pub(crate) async fn post_with<P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<ApiResponse> {
        let params = to_params(params)?;
        self.transport.post(path, Some(params)).await
    }

    pub(crate) async fn post_raw(&self, path: &str, params: Params) -> Result<ApiResponse> {
        self.transport.post(path, Some(params)).await
    }
}
