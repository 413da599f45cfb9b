//! Health status values
//!
//! A status is one of `pass`, `warn` or `fail`, both for the service as a
//! whole and for each dependency in `details`. Readers are lenient: the
//! value is case-insensitive and the aliases used by common frameworks
//! (`ok`/`up` for pass, `error`/`down` for fail) are accepted. Writers
//! always emit the canonical lowercase form.

use crate::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Health status of a service or one of its dependencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Healthy
    #[default]
    Pass,
    /// Healthy, with some concerns
    Warn,
    /// Unhealthy
    Fail,
}

impl Status {
    /// Canonical wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pass" | "ok" | "up" => Ok(Status::Pass),
            "warn" => Ok(Status::Warn),
            "fail" | "error" | "down" => Ok(Status::Fail),
            _ => Err(Error::invalid_status(s)),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_canonical_values() {
        assert_eq!("pass".parse::<Status>().unwrap(), Status::Pass);
        assert_eq!("warn".parse::<Status>().unwrap(), Status::Warn);
        assert_eq!("fail".parse::<Status>().unwrap(), Status::Fail);
    }

    #[test]
    fn test_aliases() {
        assert_eq!("ok".parse::<Status>().unwrap(), Status::Pass);
        assert_eq!("UP".parse::<Status>().unwrap(), Status::Pass);
        assert_eq!("Error".parse::<Status>().unwrap(), Status::Fail);
        assert_eq!("down".parse::<Status>().unwrap(), Status::Fail);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "degraded".parse::<Status>().unwrap_err();
        assert!(matches!(err, Error::InvalidStatus { ref value } if value == "degraded"));
    }

    #[test]
    fn test_aliases_are_not_emitted() {
        let status: Status = serde_json::from_str("\"UP\"").unwrap();
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"pass\"");

        let status: Status = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"fail\"");
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<Status>("\"maybe\"").is_err());
    }

    proptest! {
        #[test]
        fn proptest_parsing_ignores_case(
            word in prop::sample::select(vec!["pass", "warn", "fail", "ok", "up", "error", "down"]),
            mask in prop::collection::vec(any::<bool>(), 5)
        ) {
            let mixed: String = word
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect();

            let expected = word.parse::<Status>().unwrap();
            prop_assert_eq!(mixed.parse::<Status>().unwrap(), expected);
        }
    }
}
