//! Authorization for sensitive detail providers
//!
//! Provides bearer-token gating so that providers exposing internal
//! topology are only included for callers presenting a known, unexpired
//! token. Public providers need none of this: the default
//! [`DetailsProvider::authorize_health`] admits every request.

use crate::provider::{DetailsProvider, RequestContext};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;
use vitals_core::{Details, Result};

/// Authentication token information
#[derive(Debug, Clone)]
pub struct BearerToken {
    /// Token name/description
    pub name: String,
    /// Token creation time
    pub created_at: SystemTime,
    /// Optional expiration time
    pub expires_at: Option<SystemTime>,
}

impl BearerToken {
    fn is_expired(&self, now: SystemTime) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }
}

/// Set of bearer tokens accepted for gated providers
#[derive(Debug, Default)]
pub struct BearerTokenPolicy {
    tokens: RwLock<HashMap<String, BearerToken>>,
}

impl BearerTokenPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an authentication token
    pub fn add_token(
        &self,
        token: impl Into<String>,
        name: impl Into<String>,
        expires_at: Option<SystemTime>,
    ) {
        let entry = BearerToken {
            name: name.into(),
            created_at: SystemTime::now(),
            expires_at,
        };
        self.tokens.write().insert(token.into(), entry);
    }

    /// Remove a token, returning its metadata if it was known
    pub fn revoke(&self, token: &str) -> Option<BearerToken> {
        self.tokens.write().remove(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.read().is_empty()
    }

    /// Whether the request carries a known, unexpired bearer token
    pub fn allows(&self, request: &RequestContext) -> bool {
        let Some(token) = request.bearer_token() else {
            return false;
        };

        let tokens = self.tokens.read();
        match tokens.get(token) {
            Some(entry) if entry.is_expired(SystemTime::now()) => {
                debug!(token = %entry.name, "rejecting expired health token");
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

/// A provider whose details are only shown to bearer-token holders
pub struct Authorized<P> {
    inner: P,
    policy: Arc<BearerTokenPolicy>,
}

impl<P: DetailsProvider> Authorized<P> {
    pub fn new(inner: P, policy: Arc<BearerTokenPolicy>) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: DetailsProvider> DetailsProvider for Authorized<P> {
    async fn health_details(&self) -> Result<Details> {
        self.inner.health_details().await
    }

    fn authorize_health(&self, request: &RequestContext) -> bool {
        self.policy.allows(request) && self.inner.authorize_health(request)
    }
}
