//! Bearer token extraction.
//!
//! The token is an opaque string. Only its presence matters to the gate;
//! signature, expiry and role are checked by whoever consumes it.

use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::CookieJar;

/// Cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Scheme prefix stripped from the `authorization` header. Case-sensitive.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from request headers.
///
/// The `token` cookie wins. Otherwise the `authorization` header is used
/// with a literal `Bearer ` prefix removed; a header without that prefix is
/// taken verbatim. Empty or non-UTF-8 values count as absent.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value);

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
