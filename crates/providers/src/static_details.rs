//! Provider serving a fixed set of details

use async_trait::async_trait;
use vitals_core::{validate_detail_key, DetailEntry, Details, Result};
use vitals_endpoint::DetailsProvider;

/// Serves the same entries on every request
#[derive(Debug, Clone, Default)]
pub struct StaticDetails {
    details: Details,
}

impl StaticDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under `key`, rejecting malformed keys
    pub fn with_entry(mut self, key: impl Into<String>, entry: DetailEntry) -> Result<Self> {
        let key = key.into();
        validate_detail_key(&key)?;
        self.details.entry(key).or_default().push(entry);
        Ok(self)
    }

    pub fn from_details(details: Details) -> Result<Self> {
        for key in details.keys() {
            validate_detail_key(key)?;
        }
        Ok(Self { details })
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

#[async_trait]
impl DetailsProvider for StaticDetails {
    async fn health_details(&self) -> Result<Details> {
        Ok(self.details.clone())
    }
}
