use crate::config::VitalsConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use vitals_core::Result;
use vitals_endpoint::HealthEndpoint;

/// Serve the configured health endpoint until Ctrl-C
pub async fn serve(
    mut config: VitalsConfig,
    bind: Option<SocketAddr>,
    path: Option<String>,
) -> Result<()> {
    if let Some(bind) = bind {
        config.endpoint.bind_addr = bind;
    }
    if let Some(path) = path {
        config.endpoint.path = path;
    }
    config.endpoint.validate()?;

    let service = config.build_service()?;
    let endpoint = Arc::new(HealthEndpoint::new(service, config.endpoint));
    endpoint.serve().await
}
