//! Common domain types for the Huobi API.

use std::str::FromStr;

use crate::error::HuobiError;

/// HTTP method accepted by the Huobi REST API.
///
/// Huobi only serves GET and POST; anything else is rejected before a
/// request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read request, parameters travel in the query string only
    Get,
    /// Write request, parameters travel in the query string and the JSON body
    Post,
}

impl HttpMethod {
    /// The uppercase method name used on the wire and in the signing payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = HuobiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(HuobiError::InvalidMethod(other.to_string())),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}
