/*
[INPUT]:  Endpoint path, parameter map, credentials and connectivity options
[OUTPUT]: Signed HTTP requests and decoded response envelopes
[POS]:    HTTP layer - production request transport over reqwest
[UPDATE]: When changing signing, time sync, or response handling
*/

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::clock::{estimate_time_offset, now_ms};
use crate::http::signature::param_value;
use crate::http::{
    ClientConfig, Credentials, InverseError, Params, RequestSigner, RequestTransport,
    RestClientOptions, Result,
};
use crate::types::ApiResponse;

const SERVER_TIME_PATH: &str = "v2/public/time";

/// Issues requests against one REST host, signing them when a key pair is set
#[derive(Debug)]
pub struct RequestWrapper {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
    signer: Option<RequestSigner>,
    options: RestClientOptions,
    timeout: Duration,
    time_offset_ms: AtomicI64,
    last_sync: Mutex<Option<Instant>>,
}

impl RequestWrapper {
    pub fn new(
        credentials: Option<Credentials>,
        base_url: &str,
        options: RestClientOptions,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(config.default_headers);
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(base_url)?,
            signer: credentials
                .as_ref()
                .map(|creds| RequestSigner::new(creds.secret.clone())),
            credentials,
            options,
            timeout: config.timeout,
            time_offset_ms: AtomicI64::new(0),
            last_sync: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn options(&self) -> &RestClientOptions {
        &self.options
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Last estimated server clock offset in ms
    pub fn time_offset_ms(&self) -> i64 {
        self.time_offset_ms.load(Ordering::Relaxed)
    }

    /// Re-estimate the server clock offset and cache it for signing
    pub async fn sync_time(&self) -> Result<i64> {
        let start = now_ms();
        let response = self
            .dispatch(Method::GET, SERVER_TIME_PATH, Params::new(), None)
            .await?;
        let end = now_ms();
        let offset = estimate_time_offset(response.server_time_ms()?, start, end)?;
        self.time_offset_ms.store(offset, Ordering::Relaxed);
        debug!(offset_ms = offset, "synced server time offset");
        Ok(offset)
    }

    async fn sync_time_if_due(&self) {
        if self.options.disable_time_sync {
            return;
        }

        let interval = Duration::from_millis(self.options.sync_interval_ms);
        {
            let mut last_sync = self.last_sync.lock().unwrap_or_else(|e| e.into_inner());
            let due = last_sync.is_none_or(|at| at.elapsed() >= interval);
            if !due {
                return;
            }
            *last_sync = Some(Instant::now());
        }

        if let Err(err) = self.sync_time().await {
            warn!(error = %err, "failed to sync server time, keeping previous offset");
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse> {
        let mut params = self.prepare_params(params)?;

        let sign = if self.signer.is_some() {
            self.sync_time_if_due().await;
            self.sign(&mut params)
        } else {
            None
        };

        self.dispatch(method, path, params, sign).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        mut params: Params,
        sign: Option<String>,
    ) -> Result<ApiResponse> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        debug!(method = %method, path, signed = sign.is_some(), "sending request");

        let builder = if method == Method::GET {
            let mut query: Vec<(String, String)> = params
                .iter()
                .map(|(key, value)| (key.clone(), param_value(value)))
                .collect();
            query.sort_by(|a, b| a.0.cmp(&b.0));
            if let Some(sign) = sign {
                query.push(("sign".to_string(), sign));
            }
            let builder = self.http_client.get(url);
            if query.is_empty() {
                builder
            } else {
                builder.query(&query)
            }
        } else {
            if let Some(sign) = sign {
                params.insert("sign".to_string(), Value::String(sign));
            }
            self.http_client.request(method, url).json(&params)
        };

        self.send_json(builder).await
    }

    fn prepare_params(&self, params: Option<Params>) -> Result<Params> {
        let mut params = params.unwrap_or_default();
        if self.options.strict_param_validation {
            if let Some((key, _)) = params.iter().find(|(_, value)| value.is_null()) {
                return Err(InverseError::InvalidParams(format!(
                    "parameter {key} is null"
                )));
            }
        } else {
            params.retain(|_, value| !value.is_null());
        }
        Ok(params)
    }

    /// Add auth fields to `params` and return the signature
    fn sign(&self, params: &mut Params) -> Option<String> {
        let (credentials, signer) = self.credentials.as_ref().zip(self.signer.as_ref())?;
        params.insert("api_key".to_string(), Value::from(credentials.key.clone()));
        params.insert(
            "timestamp".to_string(),
            Value::from(now_ms() + self.time_offset_ms()),
        );
        params.insert(
            "recv_window".to_string(),
            Value::from(self.options.recv_window),
        );
        let (_, signature) = signer.sign_params(params);
        Some(signature)
    }

    async fn send_json(&self, builder: RequestBuilder) -> Result<ApiResponse> {
        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(1);
            warn!(retry_after, "rate limited by exchange");
            return Err(InverseError::RateLimit { retry_after });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse>(&body)
                .ok()
                .map(|parsed| parsed.ret_msg)
                .filter(|msg| !msg.is_empty())
                .unwrap_or(body);
            warn!(status = %status, message = %message, "request failed");
            return Err(InverseError::api_error(status, message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn map_send_error(&self, err: reqwest::Error) -> InverseError {
        if err.is_timeout() {
            InverseError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            InverseError::Http(err)
        }
    }
}

#[async_trait]
impl RequestTransport for RequestWrapper {
    async fn get(&self, path: &str, params: Option<Params>) -> Result<ApiResponse> {
        self.request(Method::GET, path, params).await
    }

    async fn post(&self, path: &str, params: Option<Params>) -> Result<ApiResponse> {
        self.request(Method::POST, path, params).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InverseError::Config("base URL is empty".to_string()));
    }
    // Url::join drops the last segment unless the base ends in a slash.
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Ok(Url::parse(&normalized)?)
}
