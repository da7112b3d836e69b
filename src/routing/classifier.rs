//! Route classification.
//!
//! # Responsibilities
//! - Hold the compiled public, API and exclusion matchers
//! - Classify a request path as public, API or protected
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Public routes are checked before the API prefix, so public API
//!   endpoints such as `/api/auth/login` classify as `Public`
//! - Explicit `Protected` rather than silent default

use std::fmt;

use crate::config::GateConfig;
use crate::routing::matcher::{Matcher, PathPrefixMatcher, PublicRouteMatcher};

/// Classification of a request path. Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Reachable without a token.
    Public,
    /// API surface that performs its own authorization.
    ApiRoute,
    /// Page route that requires a token to be present.
    Protected,
}

impl RouteClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::ApiRoute => "api",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for RouteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled classification rules.
#[derive(Debug, Clone)]
pub struct RouteClassifier {
    public: PublicRouteMatcher,
    api: PathPrefixMatcher,
    excluded: PathPrefixMatcher,
}

impl RouteClassifier {
    pub fn from_config(config: &GateConfig) -> Self {
        Self {
            public: PublicRouteMatcher::new(config.public_routes.clone()),
            api: PathPrefixMatcher::new(config.api_prefix.clone()),
            excluded: PathPrefixMatcher::any_of(config.excluded_prefixes.clone()),
        }
    }

    /// Classify a path. First match wins: public, then API, then protected.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.public.matches(path) {
            RouteClass::Public
        } else if self.api.matches(path) {
            RouteClass::ApiRoute
        } else {
            RouteClass::Protected
        }
    }

    /// Static assets that never reach the gate.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded.matches(path)
    }

    pub fn public_routes(&self) -> &PublicRouteMatcher {
        &self.public
    }
}
