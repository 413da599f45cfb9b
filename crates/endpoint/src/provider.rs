//! Details provider capability and the request view it is given

use async_trait::async_trait;
use hyper::header::AUTHORIZATION;
use hyper::{HeaderMap, Method, Request, Uri};
use std::net::SocketAddr;
use std::sync::Arc;
use vitals_core::{Details, Result};

/// Peer address of an inbound request, stored in request extensions by the
/// transport when known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteAddr(pub SocketAddr);

/// What a provider may inspect when deciding whether to contribute
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    remote_addr: Option<SocketAddr>,
}

impl RequestContext {
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: HeaderMap::new(),
            remote_addr: None,
        }
    }

    /// Capture the parts of a request relevant to health handling
    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            method: req.method().clone(),
            uri: req.uri().clone(),
            headers: req.headers().clone(),
            remote_addr: req.extensions().get::<RemoteAddr>().map(|addr| addr.0),
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_remote_addr(mut self, addr: SocketAddr) -> Self {
        self.remote_addr = Some(addr);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn remote_addr(&self) -> Option<SocketAddr> {
        self.remote_addr
    }

    /// Token from an `Authorization: Bearer <token>` header
    ///
    /// The scheme name is matched case-insensitively.
    pub fn bearer_token(&self) -> Option<&str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.trim().split_once(' ')?;
        let token = token.trim_start();
        if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
            Some(token)
        } else {
            None
        }
    }
}

/// A source of dependency observations for the `details` object
///
/// Providers are queried once per authorized request, in registration
/// order. They own their timeout discipline: the service waits for
/// `health_details` to complete.
#[async_trait]
pub trait DetailsProvider: Send + Sync {
    /// Current contribution of this provider, keyed by
    /// `component[:measurement]`
    async fn health_details(&self) -> Result<Details>;

    /// Whether this provider's details may be included in the response to
    /// `request`. Providers are public unless they say otherwise.
    fn authorize_health(&self, _request: &RequestContext) -> bool {
        true
    }
}

#[async_trait]
impl<P: DetailsProvider + ?Sized> DetailsProvider for Arc<P> {
    async fn health_details(&self) -> Result<Details> {
        (**self).health_details().await
    }

    fn authorize_health(&self, request: &RequestContext) -> bool {
        (**self).authorize_health(request)
    }
}
