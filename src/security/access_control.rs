//! Access gate.
//!
//! Decides, per request, whether to let it through or send the visitor to
//! the login page. The decision is a pure function of the path, the
//! presence of a token and the immutable [`GateConfig`].
//!
//! Token validity is not checked here. Pages and API handlers behind the
//! gate verify the token and the caller's role themselves.

use axum::http::{Request, Uri};
use url::form_urlencoded;

use crate::config::GateConfig;
use crate::routing::{RouteClass, RouteClassifier};
use crate::security::token::extract_token;

/// Value of the `mode` query parameter on login redirects.
pub const LOGIN_MODE: &str = "login";

/// Result of running a request through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Pass the request through unmodified.
    Continue,
    /// Redirect to the contained target.
    Redirect(String),
}

impl GateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Redirect(_) => "redirect",
        }
    }
}

/// Route-based access gate.
#[derive(Debug, Clone)]
pub struct AccessGate {
    classifier: RouteClassifier,
    auth_path: String,
}

impl AccessGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            classifier: RouteClassifier::from_config(&config),
            auth_path: config.auth_path,
        }
    }

    /// Classify a path as public, API or protected.
    pub fn classify(&self, path: &str) -> RouteClass {
        self.classifier.classify(path)
    }

    /// Whether the path is a static asset that bypasses the gate.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.classifier.is_excluded(path)
    }

    /// Decide for a path given whether a token was presented.
    pub fn evaluate(&self, path: &str, token: Option<&str>) -> GateOutcome {
        match self.classify(path) {
            RouteClass::Public | RouteClass::ApiRoute => GateOutcome::Continue,
            RouteClass::Protected => match token {
                Some(_) => GateOutcome::Continue,
                None => GateOutcome::Redirect(login_redirect(&self.auth_path, path)),
            },
        }
    }

    /// Extract the token from the request and decide.
    pub fn check<B>(&self, req: &Request<B>) -> GateOutcome {
        let token = extract_token(req.headers());
        self.evaluate(req.uri().path(), token.as_deref())
    }

    pub fn auth_path(&self) -> &str {
        &self.auth_path
    }
}

/// Path component of a request target, as the server sees it.
///
/// Accepts origin-form (`/teacher?term=2`) or absolute URLs. The query is
/// dropped; a target that does not parse as a URI is cut at the first `?`.
pub fn request_path(target: &str) -> String {
    match target.parse::<Uri>() {
        Ok(uri) => uri.path().to_string(),
        Err(_) => target.split('?').next().unwrap_or(target).to_string(),
    }
}

/// Build `{auth_path}?mode=login&redirect={original_path}` with the query
/// form-encoded.
pub fn login_redirect(auth_path: &str, original_path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("mode", LOGIN_MODE)
        .append_pair("redirect", original_path)
        .finish();
    format!("{auth_path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn gate() -> AccessGate {
        AccessGate::new(GateConfig::default())
    }

    fn request(path: &str, headers: &[(&str, &str)]) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_root_is_public() {
        assert_eq!(gate().check(&request("/", &[])), GateOutcome::Continue);
    }

    #[test]
    fn test_protected_without_token_redirects() {
        assert_eq!(
            gate().check(&request("/teacher", &[])),
            GateOutcome::Redirect("/auth?mode=login&redirect=%2Fteacher".into())
        );
    }

    #[test]
    fn test_public_prefix_match() {
        assert_eq!(gate().check(&request("/about/facility/5", &[])), GateOutcome::Continue);
    }

    #[test]
    fn test_api_bypass() {
        assert_eq!(gate().check(&request("/api/news", &[])), GateOutcome::Continue);
    }

    #[test]
    fn test_cookie_token_passes() {
        let req = request("/admin/reports", &[("cookie", "token=xyz")]);
        assert_eq!(gate().check(&req), GateOutcome::Continue);
    }

    #[test]
    fn test_bearer_header_passes() {
        let req = request("/admin/reports", &[("authorization", "Bearer xyz")]);
        assert_eq!(gate().check(&req), GateOutcome::Continue);
    }

    #[test]
    fn test_public_and_api_ignore_token() {
        let gate = gate();
        for path in ["/", "/news", "/gallery/2024", "/auth", "/api/auth/logout", "/api/staff"] {
            assert_eq!(gate.evaluate(path, None), GateOutcome::Continue, "{path}");
            assert_eq!(gate.evaluate(path, Some("t")), GateOutcome::Continue, "{path}");
        }
    }

    #[test]
    fn test_query_string_not_part_of_redirect() {
        let req = request("/teacher/classes?term=2", &[]);
        assert_eq!(
            gate().check(&req),
            GateOutcome::Redirect("/auth?mode=login&redirect=%2Fteacher%2Fclasses".into())
        );
    }

    #[test]
    fn test_request_path_drops_query() {
        assert_eq!(request_path("/teacher?x=1"), "/teacher");
        assert_eq!(request_path("http://gbhs.example/admin/reports?page=2"), "/admin/reports");
        assert_eq!(request_path("/about/facility/5"), "/about/facility/5");
        assert_eq!(request_path("/bad path?x=1"), "/bad path");

        // Same outcome as a live request for the same target
        let gate = gate();
        assert_eq!(
            gate.evaluate(&request_path("/teacher/classes?term=2"), None),
            gate.check(&request("/teacher/classes?term=2", &[]))
        );
    }

    #[test]
    fn test_login_redirect_encoding() {
        assert_eq!(
            login_redirect("/auth", "/admin/news/edit 1"),
            "/auth?mode=login&redirect=%2Fadmin%2Fnews%2Fedit+1"
        );
    }

    #[test]
    fn test_custom_auth_path() {
        let config = GateConfig {
            public_routes: vec!["/".into(), "/signin".into()],
            auth_path: "/signin".into(),
            ..GateConfig::default()
        };
        let gate = AccessGate::new(config);
        assert_eq!(
            gate.evaluate("/dashboard", None),
            GateOutcome::Redirect("/signin?mode=login&redirect=%2Fdashboard".into())
        );
    }
}
