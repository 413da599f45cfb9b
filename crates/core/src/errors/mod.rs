//! Error types for vitals operations

mod builders;
mod types;

pub use types::{Error, Result};
