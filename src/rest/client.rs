//! Huobi REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use tracing::debug;
use url::Url;

use crate::auth::{Clock, Credentials, SystemClock, format_timestamp, sign_request};
use crate::config::{ClientConfig, ProxyConfig};
use crate::error::{ApiError, HuobiError};
use crate::rest::canonical::{canonical_query_string, normalize_path, requires_signature};
use crate::rest::endpoints::{CONTENT_TYPE_JSON, DEFAULT_USER_AGENT, PROTOCOL};
use crate::rest::envelope::ResponseEnvelope;
use crate::rest::traits::HuobiClient;
use crate::types::{HttpMethod, RequestParams};

/// Value of the `SignatureMethod` parameter.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";
/// Value of the `SignatureVersion` parameter.
pub const SIGNATURE_VERSION: &str = "2";

/// The Huobi REST API client.
///
/// Every call performs exactly one HTTP request and resolves to either the
/// validated response envelope or a single error. Paths under `/market` are
/// sent as-is; every other path is signed with the configured credentials.
///
/// # Example
///
/// ```rust,no_run
/// use huobi_api_client::rest::HuobiRestClient;
/// use huobi_api_client::types::RequestParams;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HuobiRestClient::new("access_key", "secret_key")?;
///
///     let params = RequestParams::new().with("symbol", "btcusdt");
///     let trade = client.get("/market/trade", Some(&params)).await?;
///     println!("Trade: {:?}", trade.get("tick"));
///
///     let accounts = client.get("/v1/account/accounts", None).await?;
///     println!("Accounts: {:?}", accounts.data());
///
///     Ok(())
/// }
/// ```
///
/// Use the builder for a proxy, another hostname or a shorter timeout:
///
/// ```rust,no_run
/// use std::time::Duration;
///
/// use huobi_api_client::auth::Credentials;
/// use huobi_api_client::config::ProxyConfig;
/// use huobi_api_client::rest::HuobiRestClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HuobiRestClient::builder()
///     .credentials(Credentials::new("access_key", "secret_key"))
///     .hostname("api-aws.huobi.pro")
///     .proxy(ProxyConfig::new("127.0.0.1", 1087))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HuobiRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    hostname: String,
    credentials: Arc<Credentials>,
    clock: Arc<dyn Clock>,
}

/// A request after parameter assembly and signing.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Normalized path
    pub path: String,
    /// Parameters before serialization, sent as the JSON body of POST requests
    pub params: RequestParams,
    /// Final query string, with `Signature` appended for private paths
    pub query: String,
    /// The encoded signature, `None` for public paths
    pub signature: Option<String>,
}

impl HuobiRestClient {
    /// Create a client for the production API with default settings.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, HuobiError> {
        Self::builder()
            .credentials(Credentials::new(access_key, secret_key))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> HuobiRestClientBuilder {
        HuobiRestClientBuilder::new()
    }

    /// The API hostname used in signatures.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The origin requests are signed for, e.g. `https://api.huobi.pro`.
    pub fn host(&self) -> String {
        format!("{}://{}", PROTOCOL, self.hostname)
    }

    /// Send a GET request.
    pub async fn get(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> Result<ResponseEnvelope, HuobiError> {
        self.request(HttpMethod::Get, path, params).await
    }

    /// Send a POST request.
    ///
    /// The parameters go both into the query string and into the JSON body.
    pub async fn post(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> Result<ResponseEnvelope, HuobiError> {
        self.request(HttpMethod::Post, path, params).await
    }

    /// Send a request with a method given as a string.
    ///
    /// Fails with [`HuobiError::InvalidMethod`] for anything but `GET` or `POST`.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        params: Option<&RequestParams>,
    ) -> Result<ResponseEnvelope, HuobiError> {
        let method = method.parse::<HttpMethod>()?;
        self.request(method, path, params).await
    }

    /// Normalize, sign and send a request.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&RequestParams>,
    ) -> Result<ResponseEnvelope, HuobiError> {
        let path = normalize_path(path);
        let signed = self.sign_params(method, &path, params)?;
        self.dispatch(signed).await
    }

    /// Assemble and sign the parameters of a request.
    ///
    /// `path` must already be normalized. Private paths get `AccessKeyId`,
    /// `SignatureMethod`, `SignatureVersion` and `Timestamp` first, then the
    /// caller's parameters on top (caller wins on collision), and finally a
    /// `Signature` at the end of the query string. Public paths only carry the
    /// caller's parameters.
    pub fn sign_params(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&RequestParams>,
    ) -> Result<SignedRequest, HuobiError> {
        if !path.starts_with('/') {
            return Err(HuobiError::InvalidPath(path.to_string()));
        }

        let needs_signature = requires_signature(path);

        let mut request_params = if needs_signature {
            RequestParams::new()
                .with("AccessKeyId", self.credentials.access_key.as_str())
                .with("SignatureMethod", SIGNATURE_METHOD)
                .with("SignatureVersion", SIGNATURE_VERSION)
                .with("Timestamp", format_timestamp(self.clock.now_utc())?)
        } else {
            RequestParams::new()
        };
        if let Some(params) = params {
            request_params.overlay(params);
        }

        let canonical_query = canonical_query_string(&request_params);

        if !needs_signature {
            return Ok(SignedRequest {
                method,
                path: path.to_string(),
                params: request_params,
                query: canonical_query,
                signature: None,
            });
        }

        let signature = sign_request(
            &self.credentials,
            method,
            &self.hostname,
            path,
            &canonical_query,
        )?;

        Ok(SignedRequest {
            method,
            path: path.to_string(),
            params: request_params,
            query: format!("{canonical_query}&Signature={signature}"),
            signature: Some(signature),
        })
    }

    /// Send a signed request and validate the response.
    async fn dispatch(&self, signed: SignedRequest) -> Result<ResponseEnvelope, HuobiError> {
        let url = format!("{}{}?{}", self.base_url, signed.path, signed.query);

        debug!(
            method = %signed.method,
            path = %signed.path,
            signed = signed.signature.is_some(),
            "Sending Huobi REST request"
        );

        let mut request = self.http_client.request(signed.method.into(), &url);
        if signed.method == HttpMethod::Post {
            // The body repeats the query parameters, without the signature.
            request = request.body(serde_json::to_vec(&signed.params)?);
        }

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the Huobi API.
    async fn parse_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ResponseEnvelope, HuobiError> {
        let status = response.status();

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            return Err(HuobiError::HttpStatus { status, body });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HuobiError::Timeout
            } else {
                HuobiError::Http(e)
            }
        })?;

        // Huobi returns 200 for rejected requests, so check the envelope status.
        let envelope = ResponseEnvelope::from_body(&body)?;
        if !envelope.is_ok() {
            return Err(HuobiError::Api(ApiError::new(envelope)));
        }

        Ok(envelope)
    }
}

impl std::fmt::Debug for HuobiRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuobiRestClient")
            .field("hostname", &self.hostname)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HuobiClient for HuobiRestClient {
    async fn get(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> Result<ResponseEnvelope, HuobiError> {
        HuobiRestClient::get(self, path, params).await
    }

    async fn post(
        &self,
        path: &str,
        params: Option<&RequestParams>,
    ) -> Result<ResponseEnvelope, HuobiError> {
        HuobiRestClient::post(self, path, params).await
    }
}

/// Builder for [`HuobiRestClient`].
pub struct HuobiRestClientBuilder {
    credentials: Option<Credentials>,
    config: ClientConfig,
    base_url: Option<String>,
    user_agent: Option<String>,
    clock: Option<Arc<dyn Clock>>,
}

impl HuobiRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            credentials: None,
            config: ClientConfig::default(),
            base_url: None,
            user_agent: None,
            clock: None,
        }
    }

    /// Set the credentials used to sign private requests. Required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replace the whole connection configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API hostname (defaults to `api.huobi.pro`).
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = hostname.into();
        self
    }

    /// Tunnel every request through an HTTP proxy.
    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the request timeout (defaults to 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the origin requests are sent to (useful for testing with a mock server).
    ///
    /// Signatures are still computed for the configured hostname.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the clock used for the `Timestamp` parameter.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`HuobiError::Configuration`] when credentials are missing
    /// or empty, or when the hostname, proxy or user agent are unusable.
    pub fn build(self) -> Result<HuobiRestClient, HuobiError> {
        let credentials = self.credentials.ok_or_else(|| {
            HuobiError::Configuration("Params Missing: accessKey or secretKey".to_string())
        })?;
        credentials.validate()?;

        let config = self.config;
        let host = config.host();
        let parsed = Url::parse(&host)
            .map_err(|e| HuobiError::Configuration(format!("Invalid hostname {host:?}: {e}")))?;
        if parsed.path() != "/" || parsed.query().is_some() {
            return Err(HuobiError::Configuration(format!(
                "Hostname must not contain a path or query: {:?}",
                config.hostname
            )));
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let header_value = HeaderValue::from_str(&user_agent)
            .map_err(|e| HuobiError::Configuration(format!("Invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, header_value);

        let mut http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout());
        http = match &config.proxy {
            Some(proxy) => http.proxy(
                reqwest::Proxy::all(proxy.url())
                    .map_err(|e| HuobiError::Configuration(format!("Invalid proxy: {e}")))?,
            ),
            // Without an explicit proxy, ignore HTTP_PROXY and friends too.
            None => http.no_proxy(),
        };
        let reqwest_client = http
            .build()
            .map_err(|e| HuobiError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(host);

        Ok(HuobiRestClient {
            http_client: client,
            base_url,
            hostname: config.hostname,
            credentials: Arc::new(credentials),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }
}

impl Default for HuobiRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
