//! Core document model, errors, and constants for `vitals`.
//!
//! This crate defines the `application/health+json` document served by a
//! health endpoint: the top-level [`HealthReport`], its per-dependency
//! [`DetailEntry`] observations, and the [`Status`] shared by both.
//!
//! ## Key Components
//!
//! - **`model`**: The wire-serializable `HealthReport` and `DetailEntry`
//!   types. Optional fields are omitted from the JSON output when absent.
//! - **`status`**: The `pass`/`warn`/`fail` status with its tolerant,
//!   case-insensitive parser.
//! - **`key`**: Rules for `details` keys (`component` or
//!   `component:measurement`) and the predefined measurement names.
//! - **`errors`**: The crate-wide `Error` enum and `Result` alias.
//! - **`constants`**: Media type and header values used on the wire.

pub mod constants;
pub mod errors;
pub mod key;
pub mod model;
pub mod status;

pub use self::{
    constants::*,
    errors::{Error, Result},
    key::{validate_detail_key, DetailKey},
    model::{DetailEntry, Details, HealthReport, Links},
    status::Status,
};
