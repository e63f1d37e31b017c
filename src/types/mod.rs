//! Common types used across the Huobi client library.

pub mod common;
pub mod params;

pub use common::HttpMethod;
pub use params::{ParamValue, RequestParams};
