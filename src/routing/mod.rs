//! Request routing: fixed path table, per-route behavior and the outer
//! failure boundary.

mod extract;
mod route;
mod router;

pub use extract::{custom_headers, parse_body, CUSTOM_HEADER_PREFIXES};
pub use route::{normalize_path, Route};
pub use router::Router;
