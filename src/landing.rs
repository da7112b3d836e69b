//! Post-login landing paths.
//!
//! The login page sends a signed-in user either back to the page the gate
//! redirected them from or to the home page of their role. This mapping is
//! independent of the gate, which never looks at roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account roles known to the website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Teacher,
    Admin,
    SuperAdmin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Admin => "admin",
            Self::SuperAdmin => "super-admin",
            Self::User => "user",
        }
    }

    /// Home page for the role.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Teacher => "/teacher",
            Self::Admin => "/admin",
            Self::SuperAdmin => "/super-admin",
            Self::User => "/",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(Self::Teacher),
            "admin" => Ok(Self::Admin),
            "super-admin" | "super_admin" => Ok(Self::SuperAdmin),
            "user" => Ok(Self::User),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Where to send a user after a successful login.
///
/// A `redirect` hint wins when it is a local path. Anything else,
/// including protocol-relative `//host` targets, falls back to the role's
/// landing path.
pub fn post_login_destination<'a>(role: Role, redirect: Option<&'a str>) -> &'a str {
    match redirect {
        Some(target) if is_local_path(target) => target,
        _ => role.landing_path(),
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.starts_with("/\\")
}
