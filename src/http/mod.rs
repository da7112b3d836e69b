//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup)
//!     → request.rs (assign request ID)
//!     → middleware/access_control.rs (exclusions, gate decision)
//!         → redirect: response.rs (307 to the login page)
//!         → continue: server.rs forwards to the upstream site
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_of, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
