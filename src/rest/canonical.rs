//! Path and query string canonicalization.
//!
//! The canonical query string is used twice: as the last line of the signing
//! payload and verbatim as the URL query string. Huobi recomputes the
//! signature from the received query, so both must match byte for byte.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::types::RequestParams;

/// Path prefix of endpoints that are served without authentication.
pub const PUBLIC_PATH_PREFIX: &str = "/market";

/// AsciiSet matching URI component encoding.
///
/// Encode every byte except the unreserved characters:
/// 'A'-'Z', 'a'-'z', '0'-'9', '-', '_', '.', '!', '~', '*', '\'', '(' and ')'.
pub static URI_COMPONENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value as a URI component.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, &URI_COMPONENT_ENCODE_SET).to_string()
}

/// Normalize a request path.
///
/// Trims surrounding whitespace, adds a leading `/` when missing and strips a
/// single trailing `/`. `"market/trade/"` becomes `"/market/trade"`.
///
/// The step is repeated until the path stops changing, so normalizing twice
/// gives the same result as normalizing once. This strips every trailing `/`,
/// not just one: `"/a//"` and `"/a/ /"` both end up as `"/a"`, where a single
/// pass would have sent `"/a/"`. Paths with at most one trailing `/` are
/// unaffected.
pub fn normalize_path(path: &str) -> String {
    let mut current = normalize_once(path);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(path: &str) -> String {
    let trimmed = path.trim();
    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    if normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// Whether requests to `path` must carry credentials and a signature.
///
/// Everything outside `/market` is private. This is a plain prefix check on
/// the normalized path; no endpoint registry is consulted.
pub fn requires_signature(path: &str) -> bool {
    !path.starts_with(PUBLIC_PATH_PREFIX)
}

/// Build the canonical query string.
///
/// Every value is URI-component encoded (keys are used as given), each pair is
/// rendered as `key=value`, and the rendered pairs are sorted as whole strings
/// before being joined with `&`.
///
/// Sorting whole `key=value` strings is not the same as sorting by key: with
/// keys `a` and `a-b`, `"a-b=1"` sorts before `"a=9"` because `-` < `=`. Huobi
/// verifies signatures against this exact ordering, so it is kept as is.
pub fn canonical_query_string(params: &RequestParams) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_uri_component(&value.to_string())))
        .collect();
    pairs.sort();
    pairs.join("&")
}
