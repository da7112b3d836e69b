//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → classifier.rs (exclusion check, then classification)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: RouteClass (Public | ApiRoute | Protected)
//!
//! Rule Compilation (at startup):
//!     GateConfig
//!     → Compile matchers (public routes, API prefix, exclusions)
//!     → Freeze as immutable RouteClassifier
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same path always gets the same class
//! - First match wins

pub mod classifier;
pub mod matcher;

pub use classifier::{RouteClass, RouteClassifier};
