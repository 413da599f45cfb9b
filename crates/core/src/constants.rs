//! Wire-level constants shared by every health response

/// Media type of a health document
pub const HEALTH_MEDIA_TYPE: &str = "application/health+json";

/// Methods accepted by the health resource, as advertised in `Allow`
pub const ALLOWED_METHODS: &str = "OPTIONS, GET, HEAD";

/// Cache directive attached to pre-flight responses (one week)
pub const PREFLIGHT_CACHE_CONTROL: &str = "max-age=604800";

/// Route used when the caller does not pick one
pub const DEFAULT_HEALTH_PATH: &str = "/health";
