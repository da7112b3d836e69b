//! Path matching logic.
//!
//! # Responsibilities
//! - Match public routes (exact path or sub-path below `{route}/`)
//! - Match plain path prefixes (API surface, static assets)
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - `/` as a public route matches only `/`; `{route}/` for it is `//`
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a set of public routes.
///
/// A path matches a route when it equals the route or starts with the
/// route followed by `/`.
#[derive(Debug, Clone)]
pub struct PublicRouteMatcher {
    routes: Vec<String>,
}

impl PublicRouteMatcher {
    pub fn new(routes: Vec<String>) -> Self {
        Self { routes }
    }

    /// Configured routes, in configuration order.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// The first route that covers `path`, if any.
    pub fn matching_route(&self, path: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route_covers(route, path))
            .map(String::as_str)
    }
}

impl Matcher for PublicRouteMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matching_route(path).is_some()
    }
}

fn route_covers(route: &str, path: &str) -> bool {
    match path.strip_prefix(route) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Matches any of a set of raw path prefixes.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefixes: Vec<String>,
}

impl PathPrefixMatcher {
    /// Create a matcher for a single prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefixes: vec![prefix.into()],
        }
    }

    /// Create a matcher that accepts any of the given prefixes.
    pub fn any_of(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}
