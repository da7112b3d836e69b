//! Response construction.
//!
//! # Design Decisions
//! - Login redirects use 307 so the original method is preserved
//! - The `Location` is a relative reference; browsers resolve it against
//!   the requested URL

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// 307 redirect to `target`.
pub fn redirect_response(target: &str) -> Response {
    match HeaderValue::from_str(target) {
        Ok(location) => (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response(),
        Err(_) => {
            tracing::error!(target = %target, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// 502 returned when the upstream site cannot be reached.
pub fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_response() {
        let res = redirect_response("/auth?mode=login&redirect=%2Fteacher");
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "/auth?mode=login&redirect=%2Fteacher"
        );
    }

    #[test]
    fn test_bad_gateway() {
        assert_eq!(bad_gateway().status(), StatusCode::BAD_GATEWAY);
    }
}
