//! HTTP value types exchanged between the server loop and the router.

mod request;
mod response;

pub use request::{FixtureRequest, Method};
pub use response::{Envelope, FixtureResponse, Outcome, StatusCode};
