//! # mockhttp - HTTP client test fixture
//!
//! A small mock HTTP server that reflects requests back as JSON so an HTTP
//! client's integration tests can check exactly what went over the wire.
//!
//! ## Routes
//!
//! | Path       | Behavior                                              | Status          |
//! |------------|-------------------------------------------------------|-----------------|
//! | `/test`    | Echoes the method and the JSON body                   | 201 POST, 200   |
//! | `/headers` | Reports `x-*` and `another-*` request headers         | 200             |
//! | `/echo`    | Echoes the JSON body                                  | 200             |
//! | `/slow`    | Answers after a delay (2 s by default)                | 200             |
//! | other      | `{"status":"error","message":"Not found"}`            | 404             |
//!
//! Bodies that are empty or not valid JSON are echoed as `{}`. Any failure
//! while handling a request becomes a 500 carrying the error message.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mockhttp::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FixtureError> {
//!     let server = FixtureServer::bind(FixtureConfig::new().host("127.0.0.1").port(0)).await?;
//!     let addr = server.local_addr();
//!
//!     let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
//!     let handle = tokio::spawn(server.run_until(async move {
//!         let _ = stopped.await;
//!     }));
//!
//!     // ... point the client under test at `http://{addr}` ...
//!     println!("fixture listening on {}", addr);
//!
//!     let _ = stop.send(());
//!     handle.await.map_err(|e| FixtureError::internal(e.to_string()))?
//! }
//! ```

pub mod error;
pub mod http;
pub mod routing;
pub mod runtime;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::error::{ErrorKind, FixtureError};
    pub use crate::http::{Envelope, FixtureRequest, FixtureResponse, Method, Outcome, StatusCode};
    pub use crate::routing::{Route, Router};
    pub use crate::runtime::{FixtureConfig, FixtureServer};
}

// Re-export for convenience
pub use error::FixtureError;
pub use http::{FixtureRequest, FixtureResponse};
pub use routing::Router;
pub use runtime::{FixtureConfig, FixtureServer};
