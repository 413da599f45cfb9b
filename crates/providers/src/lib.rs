//! Ready-made details providers
//!
//! - [`SystemUptime`] and [`ProcessUptime`] report how long the host and
//!   this process have been running, both under the `uptime` key.
//! - [`StaticDetails`] serves a fixed set of entries, typically declared in
//!   configuration.

pub mod static_details;
pub mod uptime;

pub use static_details::StaticDetails;
pub use uptime::{ProcessUptime, SystemUptime};
