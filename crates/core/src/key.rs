//! Keys of the `details` object
//!
//! A key names one logical downstream dependency, optionally qualified by
//! the measurement being reported: `componentName` or
//! `componentName:measurementName`. The colon is reserved as the
//! separator, so neither segment may contain one.

use crate::errors::{Error, Result};
use std::fmt;

/// Predefined measurement names
pub mod measurement {
    pub const UTILIZATION: &str = "utilization";
    pub const RESPONSE_TIME: &str = "responseTime";
    pub const CONNECTIONS: &str = "connections";
    pub const UPTIME: &str = "uptime";
}

/// Predefined component types
pub mod component_type {
    pub const COMPONENT: &str = "component";
    pub const DATASTORE: &str = "datastore";
    pub const SYSTEM: &str = "system";
}

const SEPARATOR: char = ':';

/// A validated `details` key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailKey(String);

impl DetailKey {
    /// Key for a component without a measurement qualifier
    pub fn component(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_segment(&name, &name)?;
        Ok(Self(name))
    }

    /// Key for a specific measurement of a component
    pub fn measurement(component: &str, measurement: &str) -> Result<Self> {
        let key = format!("{component}{SEPARATOR}{measurement}");
        check_segment(&key, component)?;
        check_segment(&key, measurement)?;
        Ok(Self(key))
    }

    /// Component part of the key
    pub fn component_name(&self) -> &str {
        self.0.split(SEPARATOR).next().unwrap_or(&self.0)
    }

    /// Measurement part of the key, when present
    pub fn measurement_name(&self) -> Option<&str> {
        self.0.split_once(SEPARATOR).map(|(_, m)| m)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DetailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DetailKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DetailKey> for String {
    fn from(key: DetailKey) -> Self {
        key.0
    }
}

impl TryFrom<&str> for DetailKey {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        validate_detail_key(value)?;
        Ok(Self(value.to_string()))
    }
}

/// Check an arbitrary string against the `component[:measurement]` format
pub fn validate_detail_key(key: &str) -> Result<()> {
    match key.split_once(SEPARATOR) {
        None => check_segment(key, key),
        Some((component, measurement)) => {
            check_segment(key, component)?;
            check_segment(key, measurement)
        }
    }
}

fn check_segment(key: &str, segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(Error::invalid_detail_key(key, "empty segment"));
    }
    if segment.contains(SEPARATOR) {
        return Err(Error::invalid_detail_key(
            key,
            format!("segment '{segment}' contains ':'"),
        ));
    }
    Ok(())
}
