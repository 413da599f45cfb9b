//! Health document model
//!
//! Field names and optionality follow the Health Check Response Format for
//! HTTP APIs. Every optional field is left out of the JSON output when it is
//! absent or an empty string; nothing is ever emitted as `null`. The one deliberate exception
//! is `details`, which distinguishes "not reported" (`None`, omitted) from
//! "reported, no dependencies" (`Some` of an empty map, emitted as `{}`).

use crate::status::Status;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-dependency observations, keyed by `component[:measurement]`
///
/// Insertion order is kept so that merged documents list dependencies in
/// the order they were first reported.
pub type Details = IndexMap<String, Vec<DetailEntry>>;

/// Link relation name to URI
pub type Links = IndexMap<String, String>;

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Top-level health document, one per response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Whether the service status is acceptable
    pub status: Status,

    /// Public version of the service
    #[serde(default, skip_serializing_if = "is_blank")]
    pub version: Option<String>,

    /// Release of the implementation behind `version`
    #[serde(default, skip_serializing_if = "is_blank")]
    pub release_id: Option<String>,

    /// Notes relevant to the current state of health
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    /// Raw error output; meaningful for `warn` and `fail` only
    #[serde(default, skip_serializing_if = "is_blank")]
    pub output: Option<String>,

    /// Status of downstream dependencies, rebuilt on every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,

    /// External links with more information about this endpoint's health
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: Links,

    /// Unique identifier of the service in the application scope
    #[serde(default, skip_serializing_if = "is_blank")]
    pub service_id: Option<String>,

    /// Human-friendly description of the service
    #[serde(default, skip_serializing_if = "is_blank")]
    pub description: Option<String>,
}

impl HealthReport {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_release_id(mut self, release_id: impl Into<String>) -> Self {
        self.release_id = Some(release_id.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, uri: impl Into<String>) -> Self {
        self.links.insert(rel.into(), uri.into());
        self
    }

    #[must_use]
    pub fn with_service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One observation about one dependency, or one node of it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEntry {
    /// Identifier of this instance of the dependency
    #[serde(default, skip_serializing_if = "is_blank")]
    pub component_id: Option<String>,

    /// Kind of dependency, e.g. `datastore` or `system`
    #[serde(default, skip_serializing_if = "is_blank")]
    pub component_type: Option<String>,

    /// Any JSON value; its shape is up to the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<serde_json::Value>,

    /// Unit of `observed_value`
    #[serde(default, skip_serializing_if = "is_blank")]
    pub observed_unit: Option<String>,

    /// Status of this observation; `pass` when missing on read
    #[serde(default)]
    pub status: Status,

    /// ISO 8601 time at which `observed_value` was read
    #[serde(default, skip_serializing_if = "is_blank")]
    pub time: Option<String>,

    /// Raw error output for this observation
    #[serde(default, skip_serializing_if = "is_blank")]
    pub output: Option<String>,

    /// Links with more information about this dependency
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: Links,
}

impl DetailEntry {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_component_id(mut self, id: impl Into<String>) -> Self {
        self.component_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_component_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    /// Set the observed value together with its unit
    #[must_use]
    pub fn with_observed(
        mut self,
        value: impl Into<serde_json::Value>,
        unit: impl Into<String>,
    ) -> Self {
        self.observed_value = Some(value.into());
        self.observed_unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_observed_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.observed_value = Some(value.into());
        self
    }

    /// Record the reading time as an RFC 3339 timestamp
    #[must_use]
    pub fn observed_at(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time.to_rfc3339_opts(SecondsFormat::Nanos, true));
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, uri: impl Into<String>) -> Self {
        self.links.insert(rel.into(), uri.into());
        self
    }
}
