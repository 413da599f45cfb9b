//! Configuration file for the `vitals` binary
//!
//! The file is JSON. Every section is optional:
//!
//! ```json
//! {
//!   "endpoint": { "bindAddr": "0.0.0.0:8080", "path": "/health" },
//!   "service": {
//!     "version": "1",
//!     "releaseId": "1.4.2",
//!     "serviceId": "orders",
//!     "description": "order intake API",
//!     "notes": ["canary"],
//!     "links": { "about": "https://example.com/orders" }
//!   },
//!   "providers": {
//!     "systemUptime": true,
//!     "processUptime": true,
//!     "staticDetails": { "postgres": [{ "componentType": "datastore", "status": "pass" }] }
//!   },
//!   "tokens": [{ "token": "s3cret", "name": "ops", "expiresAt": "2027-01-01T00:00:00Z" }]
//! }
//! ```
//!
//! When `tokens` is non-empty, `staticDetails` are only included for
//! requests presenting one of them as a bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};
use vitals_core::{Details, Error, HealthReport, Links, Result, Status};
use vitals_endpoint::{Authorized, BearerTokenPolicy, HealthEndpointConfig, HealthService};
use vitals_providers::{ProcessUptime, StaticDetails, SystemUptime};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VitalsConfig {
    pub endpoint: HealthEndpointConfig,
    pub service: ServiceMetadata,
    pub providers: ProvidersConfig,
    pub tokens: Vec<TokenConfig>,
}

/// Static fields copied into every health document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceMetadata {
    pub version: Option<String>,
    pub release_id: Option<String>,
    pub service_id: Option<String>,
    pub description: Option<String>,
    pub notes: Vec<String>,
    pub links: Links,
}

impl ServiceMetadata {
    pub fn template(&self) -> HealthReport {
        HealthReport {
            status: Status::Pass,
            version: self.version.clone(),
            release_id: self.release_id.clone(),
            notes: self.notes.clone(),
            links: self.links.clone(),
            service_id: self.service_id.clone(),
            description: self.description.clone(),
            ..HealthReport::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvidersConfig {
    pub system_uptime: bool,
    pub process_uptime: bool,
    pub static_details: Details,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            system_uptime: true,
            process_uptime: true,
            static_details: Details::new(),
        }
    }
}

/// A bearer token admitted to gated providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    pub token: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl VitalsConfig {
    /// Load from `path`, or fall back to defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read '{}'", path.display()), e))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::json(format!("invalid config file '{}'", path.display()), e))?;
        config.endpoint.validate()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn token_policy(&self) -> Arc<BearerTokenPolicy> {
        let policy = BearerTokenPolicy::new();
        for token in &self.tokens {
            policy.add_token(
                token.token.clone(),
                token.name.clone(),
                token.expires_at.map(SystemTime::from),
            );
        }
        Arc::new(policy)
    }

    /// Assemble the health service described by this configuration
    pub fn build_service(&self) -> Result<HealthService> {
        let mut builder = HealthService::builder(self.service.template());

        if self.providers.system_uptime {
            builder = builder.provider(SystemUptime::new());
        }
        if self.providers.process_uptime {
            builder = builder.provider(ProcessUptime::new()?);
        }
        if !self.providers.static_details.is_empty() {
            let provider = StaticDetails::from_details(self.providers.static_details.clone())?;
            builder = if self.tokens.is_empty() {
                builder.provider(provider)
            } else {
                builder.provider(Authorized::new(provider, self.token_policy()))
            };
        }

        let service = builder.build();
        debug!(providers = service.provider_count(), "Built health service");
        Ok(service)
    }
}
