//! Response policy for denied and undecidable requests.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Builds the response for a denied request. Free to write any status/body.
pub type RejectHandler = Arc<dyn Fn(&Request) -> Response + Send + Sync>;

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
pub const FORBIDDEN_BODY: &str = "Forbidden";
pub const AUTHZ_ERROR_BODY: &str = "Authorization error";

/// Default reject handler: 403 with a non-empty plain-text body.
pub fn forbidden(_req: &Request) -> Response {
    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
        FORBIDDEN_BODY,
    )
        .into_response()
}

/// Fixed fail-closed response for engine errors. Not configurable.
pub fn authorization_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
        AUTHZ_ERROR_BODY,
    )
        .into_response()
}
