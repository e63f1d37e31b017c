//! Trait definitions for the Huobi REST API client.
//!
//! [`HuobiClient`] abstracts the two request operations so code can be written
//! against a mock or a decorating wrapper instead of [`HuobiRestClient`](crate::rest::HuobiRestClient).
//!
//! # Example
//!
//! ```rust,ignore
//! use huobi_api_client::rest::{HuobiClient, HuobiClientExt};
//!
//! async fn account_ids<C: HuobiClient>(client: &C) -> Result<Vec<u64>, huobi_api_client::HuobiError> {
//!     #[derive(serde::Deserialize)]
//!     struct Account { id: u64 }
//!
//!     let accounts: Vec<Account> = client.get_data("/v1/account/accounts", None).await?;
//!     Ok(accounts.into_iter().map(|a| a.id).collect())
//! }
//! ```

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::HuobiError;
use crate::rest::envelope::ResponseEnvelope;
use crate::types::RequestParams;

/// Trait defining the Huobi REST request operations.
///
/// All methods are async and return `Result<ResponseEnvelope, HuobiError>`.
pub trait HuobiClient: Send + Sync {
    /// Send a GET request.
    fn get(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<ResponseEnvelope, HuobiError>> + Send;

    /// Send a POST request.
    fn post(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<ResponseEnvelope, HuobiError>> + Send;
}

/// Typed helpers available on every [`HuobiClient`].
pub trait HuobiClientExt: HuobiClient {
    /// Send a GET request and decode the `data` field.
    fn get_data<T>(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<T, HuobiError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move { self.get(path, params).await?.data_as() }
    }

    /// Send a POST request and decode the `data` field.
    fn post_data<T>(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<T, HuobiError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move { self.post(path, params).await?.data_as() }
    }
}

impl<C: HuobiClient> HuobiClientExt for C {}
