/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod clock;
pub mod conditional;
pub mod deprecated;
pub mod error;
pub mod market;
pub mod order;
pub mod position;
pub mod signature;
pub mod system;
pub mod transport;
pub mod wallet;
pub mod wrapper;

pub use error::{InverseError, Result};
pub use signature::RequestSigner;
pub use transport::{Params, RequestTransport, to_params};
pub use wrapper::RequestWrapper;

pub use client::{
    ClientConfig, Credentials, InverseClient, LIVENET_BASE_URL, RestClientOptions,
    TESTNET_BASE_URL, base_url,
};
pub use clock::estimate_time_offset;
pub use deprecated::{Compatibility, DEPRECATED_ENDPOINTS, DeprecatedEndpoint, deprecated_endpoint};
