//! Fixture runtime: configuration and the HTTP/1.1 accept loop.

mod server;
mod config;

pub use server::FixtureServer;
pub use config::FixtureConfig;
