/// Request timeout used when the configuration does not provide one (59 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 59_000;
/// Value of `APP_ENV` that marks the production deployment
pub const PRODUCTION_ENV: &str = "production";
/// Base path used when `API_BASE_PATH` is not set
pub const DEFAULT_BASE_PATH: &str = "http://localhost:8080";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("api-base/", env!("CARGO_PKG_VERSION"));
/// Suffix appended to array keys in form bodies and query strings
pub const ARRAY_KEY_SUFFIX: &str = "[]";
/// Length of the id attached to each request in the logs
pub const REQUEST_ID_LENGTH: usize = 8;
