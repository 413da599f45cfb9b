//! Health endpoint configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use vitals_core::{Error, Result, DEFAULT_HEALTH_PATH};

/// Health endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthEndpointConfig {
    /// Address the server listens on
    pub bind_addr: SocketAddr,
    /// Route answering health requests
    pub path: String,
}

impl Default for HealthEndpointConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            path: DEFAULT_HEALTH_PATH.to_string(),
        }
    }
}

impl HealthEndpointConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(Error::configuration(format!(
                "health path '{}' must start with '/'",
                self.path
            )));
        }
        if self.path.contains(['?', '#']) {
            return Err(Error::configuration(format!(
                "health path '{}' must not contain a query or fragment",
                self.path
            )));
        }
        Ok(())
    }
}
