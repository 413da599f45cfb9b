//! Main health endpoint server
//!
//! Mounts a [`HealthService`] on the configured path of a hyper server.

mod router;

use crate::config::HealthEndpointConfig;
use crate::service::HealthService;
use hyper::server::conn::AddrStream;
use hyper::service::{make_service_fn, service_fn};
use hyper::Server;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use vitals_core::{Error, Result};

pub use router::RequestRouter;

/// HTTP health check server
pub struct HealthEndpoint {
    /// Document builder shared by all connections
    service: Arc<HealthService>,
    /// Server configuration
    config: HealthEndpointConfig,
}

impl HealthEndpoint {
    pub fn new(service: HealthService, config: HealthEndpointConfig) -> Self {
        Self {
            service: Arc::new(service),
            config,
        }
    }

    pub fn config(&self) -> &HealthEndpointConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<HealthService> {
        &self.service
    }

    /// Serve until Ctrl-C is received
    pub async fn serve(self: Arc<Self>) -> Result<()> {
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        };
        self.serve_with_shutdown(shutdown).await
    }

    /// Serve until `signal` completes
    pub async fn serve_with_shutdown<F>(self: Arc<Self>, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (_, server) = self.bind_with_shutdown(signal)?;
        server.await
    }

    /// Bind the listener and return its address with the server future
    ///
    /// Binding happens before this returns, so a configured port of 0
    /// resolves to the ephemeral port actually in use.
    pub fn bind_with_shutdown<F>(
        self: Arc<Self>,
        signal: F,
    ) -> Result<(SocketAddr, impl Future<Output = Result<()>> + Send)>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.config.validate()?;
        let bind_addr = self.config.bind_addr;

        let builder = Server::try_bind(&bind_addr)
            .map_err(|e| Error::network(bind_addr.to_string(), e.to_string()))?;

        let endpoint = Arc::clone(&self);
        let make_svc = make_service_fn(move |conn: &AddrStream| {
            let endpoint = Arc::clone(&endpoint);
            let remote_addr = conn.remote_addr();

            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    let endpoint = Arc::clone(&endpoint);
                    async move {
                        let router = RequestRouter::new(&endpoint.service, &endpoint.config);
                        Ok::<_, Infallible>(router.route(req, remote_addr).await)
                    }
                }))
            }
        });

        let server = builder.serve(make_svc);
        let local_addr = server.local_addr();

        info!(
            "Health endpoint ready on http://{}{}",
            local_addr, self.config.path
        );

        let running = server.with_graceful_shutdown(signal);
        let future = async move {
            match running.await {
                Ok(()) => {
                    info!("Health endpoint on {} stopped", local_addr);
                    Ok(())
                }
                Err(e) => {
                    error!("Health endpoint server error: {}", e);
                    Err(Error::network(local_addr.to_string(), e.to_string()))
                }
            }
        };

        Ok((local_addr, future))
    }
}
