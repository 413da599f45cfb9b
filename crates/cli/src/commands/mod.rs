//! Subcommands of the `vitals` binary

mod report;
mod serve;

use clap::Subcommand;
use std::net::SocketAddr;
use vitals_endpoint::hyper::header::{self, HeaderValue};
use vitals_endpoint::hyper::{HeaderMap, Method, Uri};
use vitals_endpoint::RequestContext;

pub use report::report;
pub use serve::serve;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the health endpoint until interrupted
    Serve {
        /// Listen address, overriding the config file
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Route of the health resource, overriding the config file
        #[arg(long)]
        path: Option<String>,
    },
    /// Build one health document and print it to stdout
    Report {
        /// Bearer token to present, as an authorized caller would
        #[arg(long)]
        token: Option<String>,
        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },
}

/// Request context for a local GET of `path`
pub fn request_context(path: &str, token: Option<&str>) -> RequestContext {
    let uri = path.parse::<Uri>().unwrap_or_else(|_| Uri::from_static("/"));
    let mut headers = HeaderMap::new();
    if let Some(value) = token.and_then(|t| HeaderValue::from_str(&format!("Bearer {t}")).ok()) {
        headers.insert(header::AUTHORIZATION, value);
    }
    RequestContext::new(Method::GET, uri).with_headers(headers)
}
