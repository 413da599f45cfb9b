//! Request routing for the health endpoint

use crate::config::HealthEndpointConfig;
use crate::provider::{RemoteAddr, RequestContext};
use crate::reporting::HttpResponse;
use crate::service::HealthService;
use hyper::{Body, Request, Response};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::debug;

/// Routes one request to the health service or a 404
pub struct RequestRouter<'a> {
    service: &'a HealthService,
    config: &'a HealthEndpointConfig,
}

impl<'a> RequestRouter<'a> {
    pub fn new(service: &'a HealthService, config: &'a HealthEndpointConfig) -> Self {
        Self { service, config }
    }

    /// Route a request to the appropriate handler
    pub async fn route(&self, mut req: Request<Body>, remote_addr: SocketAddr) -> Response<Body> {
        let start_time = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = if path == self.config.path {
            req.extensions_mut().insert(RemoteAddr(remote_addr));
            let context = RequestContext::from_request(&req);
            drop(req);
            self.service.respond(&context).await
        } else {
            HttpResponse::not_found()
        };

        debug!(
            "Handled {} {} from {} -> {} in {:?}",
            method,
            path,
            remote_addr,
            response.status().as_u16(),
            start_time.elapsed()
        );

        response
    }
}
