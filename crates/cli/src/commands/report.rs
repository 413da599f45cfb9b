use super::request_context;
use crate::config::VitalsConfig;
use std::io::Write;
use vitals_core::{Error, Result};

/// Print one health document, as a GET on the configured path would return
pub async fn report(config: &VitalsConfig, token: Option<&str>, pretty: bool) -> Result<()> {
    let service = config.build_service()?;
    let context = request_context(&config.endpoint.path, token);
    let report = service.report(&context).await;

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").map_err(|e| Error::io("write report", e))
}
