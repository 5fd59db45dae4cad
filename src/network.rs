//! Network URL constants for the Bantay Presyo client.

/// Default REST API base URL (local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable consulted by `PresyoClientBuilder::from_env`.
pub const API_URL_ENV: &str = "PRESYO_API_URL";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
