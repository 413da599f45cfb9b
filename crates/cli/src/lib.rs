//! Command-line front end for a vitals health endpoint
//!
//! Loads a JSON configuration describing the service and its providers,
//! then either serves the endpoint or prints a single report.

pub mod commands;
pub mod config;
pub mod logging;
