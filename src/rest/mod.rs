//! Huobi REST API client.
//!
//! A request goes through path normalization, parameter assembly, signing,
//! transport and envelope validation, in that order.
//!
//! # Trait-based API
//!
//! The [`HuobiClient`] trait abstracts the request operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caller-side rate limiting wrapper)
//!
//! ```rust,ignore
//! use huobi_api_client::rest::{HuobiClient, HuobiRestClient};
//!
//! async fn use_client<C: HuobiClient>(client: &C) -> Result<(), huobi_api_client::HuobiError> {
//!     let tickers = client.get("/market/tickers", None).await?;
//!     println!("Tickers: {:?}", tickers.data());
//!     Ok(())
//! }
//! ```

mod canonical;
mod client;
mod endpoints;
mod envelope;
mod traits;

pub use canonical::{
    PUBLIC_PATH_PREFIX, URI_COMPONENT_ENCODE_SET, canonical_query_string, encode_uri_component,
    normalize_path, requires_signature,
};
pub use client::{
    HuobiRestClient, HuobiRestClientBuilder, SIGNATURE_METHOD, SIGNATURE_VERSION, SignedRequest,
};
pub use endpoints::*;
pub use envelope::{ResponseEnvelope, STATUS_OK};
pub use traits::{HuobiClient, HuobiClientExt};
