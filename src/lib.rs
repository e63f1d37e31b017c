//! # Huobi Client
//!
//! An async Rust client for the Huobi exchange REST API.
//!
//! ## Features
//!
//! - GET and POST requests against any REST path
//! - HMAC-SHA256 request signing (signature version 2) for every path outside `/market`
//! - One error type covering transport failures and rejected responses
//! - Optional HTTP proxy and configurable timeout
//! - Financial precision with `rust_decimal` parameter values
//!
//! Every call sends exactly one request. There are no retries, no rate limiting
//! and no caching; callers that need them wrap the client.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use huobi_api_client::rest::HuobiRestClient;
//! use huobi_api_client::types::RequestParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HuobiRestClient::new("access_key", "secret_key")?;
//!     let params = RequestParams::new().with("symbol", "btcusdt");
//!     let depth = client.get("/market/depth", Some(&params.with("type", "step0"))).await?;
//!     println!("Depth: {:?}", depth.get("tick"));
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, HuobiError};
pub use rest::{HuobiClient, HuobiRestClient, ResponseEnvelope};
pub use types::{HttpMethod, ParamValue, RequestParams};

/// Result type alias using HuobiError
pub type Result<T> = std::result::Result<T, HuobiError>;
