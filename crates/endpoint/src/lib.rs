//! Health endpoint serving `application/health+json` documents
//!
//! A [`HealthService`] owns an immutable template [`HealthReport`] and an
//! ordered list of [`DetailsProvider`]s. Each request gets its own copy of
//! the template with `details` rebuilt from the providers that authorize
//! that request, so concurrent requests never observe each other's merge.
//!
//! The service is transport-agnostic over `hyper` request/response types;
//! [`HealthEndpoint`] is a ready-made hyper server mounting it on one path.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vitals_core::{HealthReport, Status};
//! use vitals_endpoint::{HealthEndpoint, HealthEndpointConfig, HealthService};
//! use vitals_providers::{ProcessUptime, SystemUptime};
//!
//! let service = HealthService::builder(HealthReport::new(Status::Pass).with_version("1"))
//!     .provider(SystemUptime::new())
//!     .provider(ProcessUptime::new()?)
//!     .build();
//!
//! Arc::new(HealthEndpoint::new(service, HealthEndpointConfig::default()))
//!     .serve()
//!     .await?;
//! ```

pub mod auth;
pub mod config;
pub mod endpoint;
pub mod provider;
pub mod reporting;
pub mod service;

// Re-export main types
pub use auth::{Authorized, BearerTokenPolicy};
pub use config::HealthEndpointConfig;
pub use endpoint::HealthEndpoint;
pub use provider::{DetailsProvider, RemoteAddr, RequestContext};
pub use reporting::HttpResponse;
pub use service::{HealthService, HealthServiceBuilder};

pub use hyper;
pub use vitals_core::{DetailEntry, Details, Error, HealthReport, Result, Status};
