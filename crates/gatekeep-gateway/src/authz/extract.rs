//! Default attribute extractors.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName};

/// Reads one attribute of the triple from a request. Must not block.
pub type Extractor = Arc<dyn Fn(&Request) -> String + Send + Sync>;

/// Identity header read by the default subject extractor.
pub const DEFAULT_SUBJECT_HEADER: &str = "x-user";

/// Subject used when the identity header is absent or empty.
pub const ANONYMOUS: &str = "anonymous";

/// Header value verbatim, or `"anonymous"` when missing/empty.
pub fn subject_from_headers(headers: &HeaderMap, name: &HeaderName) -> String {
    match headers.get(name) {
        Some(v) if !v.is_empty() => String::from_utf8_lossy(v.as_bytes()).into_owned(),
        _ => ANONYMOUS.to_string(),
    }
}

pub fn subject_from_header(name: HeaderName) -> Extractor {
    Arc::new(move |req: &Request| subject_from_headers(req.headers(), &name))
}

/// URL path as received: no normalization, no trailing-slash handling.
pub fn object_from_path(req: &Request) -> String {
    req.uri().path().to_string()
}

pub fn action_from_method(req: &Request) -> String {
    req.method().as_str().to_string()
}
