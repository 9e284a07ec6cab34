//! Fixture server configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the fixture server.
///
/// Fields missing from a deserialized config take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on. `0` picks an ephemeral port.
    pub port: u16,
    /// How long `/slow` waits before answering, in milliseconds.
    pub slow_delay_ms: u64,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            slow_delay_ms: 2000,
        }
    }
}

impl FixtureConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the `/slow` delay.
    pub fn slow_delay_ms(mut self, millis: u64) -> Self {
        self.slow_delay_ms = millis;
        self
    }

    /// The `/slow` delay as a [`Duration`].
    pub fn slow_delay(&self) -> Duration {
        Duration::from_millis(self.slow_delay_ms)
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
