//! The Huobi response envelope.
//!
//! Every REST response is a JSON object with a `status` discriminator next to
//! the payload, e.g. `{"status": "ok", "data": [...]}` or
//! `{"status": "error", "err-code": "...", "err-msg": "..."}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HuobiError;

/// Status value of a successful response, compared case-insensitively.
pub const STATUS_OK: &str = "ok";

/// A parsed response body.
///
/// The whole object is kept, including fields beyond `status` and `data`
/// (`ts`, `ch`, `tick`, `err-code`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseEnvelope(Map<String, Value>);

impl ResponseEnvelope {
    /// Build an envelope from a JSON value.
    ///
    /// Fails unless the value is an object with a string `status` field.
    pub fn from_value(value: Value) -> Result<Self, HuobiError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(HuobiError::InvalidResponse(format!(
                    "Expected a JSON object, got: {other}"
                )));
            }
        };
        if !map.get("status").is_some_and(Value::is_string) {
            return Err(HuobiError::InvalidResponse(format!(
                "Response missing 'status' field: {}",
                Value::Object(map)
            )));
        }
        Ok(Self(map))
    }

    /// Parse an envelope from a raw response body.
    pub fn from_body(body: &str) -> Result<Self, HuobiError> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            HuobiError::InvalidResponse(format!("Failed to parse response: {e}. Body: {body}"))
        })?;
        Self::from_value(value)
    }

    /// The `status` field as returned by the server.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Whether `status` is `ok`, ignoring case.
    pub fn is_ok(&self) -> bool {
        self.status()
            .is_some_and(|status| status.eq_ignore_ascii_case(STATUS_OK))
    }

    /// Get any top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The `data` payload, if present.
    pub fn data(&self) -> Option<&Value> {
        self.get("data")
    }

    /// Decode the `data` payload into a typed value.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, HuobiError> {
        let data = self
            .data()
            .ok_or_else(|| HuobiError::InvalidResponse("Response missing 'data' field".into()))?;
        Ok(T::deserialize(data)?)
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a plain JSON value.
    pub fn into_inner(self) -> Value {
        Value::Object(self.0)
    }
}

impl PartialEq<Value> for ResponseEnvelope {
    fn eq(&self, other: &Value) -> bool {
        matches!(other, Value::Object(map) if *map == self.0)
    }
}
