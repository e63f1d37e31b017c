//! HMAC-SHA256 signature generation for Huobi API authentication.
//!
//! Huobi private endpoints require a signature computed as:
//! ```text
//! HMAC-SHA256(METHOD + "\n" + hostname + "\n" + path + "\n" + canonical_query, secret_key)
//! ```
//!
//! The digest is Base64-encoded, then URI-component encoded and appended to
//! the query string as the last parameter, `&Signature=...`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::HuobiError;
use crate::rest::encode_uri_component;
use crate::types::HttpMethod;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for Huobi's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `method` - HTTP method of the request
/// * `hostname` - API hostname without scheme (e.g., "api.huobi.pro")
/// * `path` - The normalized endpoint path (e.g., "/v1/account/accounts")
/// * `canonical_query` - The sorted, encoded query string without `Signature`
///
/// # Returns
///
/// The URI-component encoded Base64 HMAC-SHA256 signature, ready to be
/// appended to the query string.
///
/// # Example
///
/// ```rust
/// use huobi_api_client::auth::{Credentials, sign_request};
/// use huobi_api_client::types::HttpMethod;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("access_key", "secret_key");
/// let signature = sign_request(
///     &credentials,
///     HttpMethod::Get,
///     "api.huobi.pro",
///     "/v1/account/accounts",
///     "AccessKeyId=access_key&SignatureMethod=HmacSHA256&SignatureVersion=2\
///      &Timestamp=2024-01-01T00%3A00%3A00",
/// )?;
/// assert!(signature.ends_with("%3D"));
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    method: HttpMethod,
    hostname: &str,
    path: &str,
    canonical_query: &str,
) -> Result<String, HuobiError> {
    let payload = [method.as_str(), hostname, path, canonical_query].join("\n");

    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| HuobiError::Signing(format!("Invalid HMAC key: {e}")))?;
    hmac.update(payload.as_bytes());
    let digest = hmac.finalize().into_bytes();

    Ok(encode_uri_component(&BASE64.encode(digest)))
}
