use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_REQUEST_TIMEOUT_MS, PRODUCTION_ENV};
use crate::utils::config::{env_equals, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Options shared by the transport and the request façade
pub struct HttpClientConfig {
    /// Timeout applied to every request. `None` uses the default of 59 seconds.
    pub request_timeout: Option<Duration>,
    /// Send array form fields under `key[]` instead of `key`
    pub add_square_brackets_to_form_data_array_keys: bool,
}

impl HttpClientConfig {
    /// Creates a configuration with the default timeout and no array brackets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Enable or disable `[]` suffixes on array form keys
    #[must_use]
    pub fn with_square_brackets(mut self, enabled: bool) -> Self {
        self.add_square_brackets_to_form_data_array_keys = enabled;
        self
    }

    /// Timeout the transport is built with
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        self.request_timeout
            .unwrap_or(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS))
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Service configuration loaded from the environment
pub struct Config {
    /// Base URL of the API
    pub base_path: String,
    /// Transport and façade options
    pub http: HttpClientConfig,
    /// Keep cookies across requests (production deployments only)
    pub include_credentials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and the `.env` file
    ///
    /// | variable | field |
    /// |---|---|
    /// | `API_BASE_PATH` | `base_path` |
    /// | `API_REQUEST_TIMEOUT_MS` | `http.request_timeout` |
    /// | `API_FORM_ARRAY_BRACKETS` | `http.add_square_brackets_to_form_data_array_keys` |
    /// | `APP_ENV` | `include_credentials`, true only for `production` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let request_timeout =
            get_env_or_none::<u64>("API_REQUEST_TIMEOUT_MS").map(Duration::from_millis);

        Config {
            base_path: get_env_or_default("API_BASE_PATH", String::from(DEFAULT_BASE_PATH)),
            http: HttpClientConfig {
                request_timeout,
                add_square_brackets_to_form_data_array_keys: get_env_or_default(
                    "API_FORM_ARRAY_BRACKETS",
                    false,
                ),
            },
            include_credentials: env_equals("APP_ENV", PRODUCTION_ENV),
        }
    }
}
