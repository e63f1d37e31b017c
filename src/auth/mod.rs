//! Authentication module for the Huobi API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - An injectable UTC clock for the signed `Timestamp` parameter
//! - HMAC-SHA256 signature generation for authenticated requests

mod clock;
mod credentials;
mod signature;

pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use credentials::{ACCESS_KEY_VAR, Credentials, SECRET_KEY_VAR};
pub use signature::sign_request;
