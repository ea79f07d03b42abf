/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bybit inverse adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Compatibility,
    Credentials,
    DEPRECATED_ENDPOINTS,
    DeprecatedEndpoint,
    InverseClient,
    InverseError,
    LIVENET_BASE_URL,
    Params,
    RequestSigner,
    RequestTransport,
    RequestWrapper,
    RestClientOptions,
    Result,
    TESTNET_BASE_URL,
    base_url,
    deprecated_endpoint,
    estimate_time_offset,
};

// Re-export all types
pub use types::*;
