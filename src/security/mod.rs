//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (not an excluded asset):
//!     → token.rs (cookie `token`, else `authorization: Bearer ...`)
//!     → access_control.rs (classify path, decide continue / redirect)
//!     → Pass to upstream, or 307 to the login page
//! ```
//!
//! # Design Decisions
//! - The gate checks token presence only; validity is the destination's job
//! - A missing token is a normal branch, never an error
//! - Rules are immutable and shared, so evaluation needs no locks

pub mod access_control;
pub mod token;

pub use access_control::{login_redirect, request_path, AccessGate, GateOutcome, LOGIN_MODE};
pub use token::extract_token;
