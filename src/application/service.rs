/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Service construction
//!
//! Every API service is built the same way: one [`Transport`] scoped to the
//! service base path, one [`UnauthorizedInterceptor`] installed on it, and a
//! builder function that turns the transport into the service value.

use crate::application::auth::{AuthProvider, UnauthorizedInterceptor};
use crate::application::config::{Config, HttpClientConfig};
use crate::client::HttpClient;
use crate::error::AppError;
use crate::model::http::Transport;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use tracing::info;

/// Creates a service bound to `base_path`
///
/// The transport uses `config.request_timeout` (59 seconds when unset) and
/// keeps cookies only when `include_credentials` is true. Exactly one
/// [`UnauthorizedInterceptor`] is installed; with an auth provider, any
/// `401` response calls its `logout` before the error reaches the caller.
///
/// # Arguments
/// * `build` - Turns the transport and config into the service
/// * `base_path` - Base URL of the API
/// * `auth_provider` - Logged out on `401` responses
/// * `config` - Transport and façade options
/// * `include_credentials` - Keep and resend cookies
///
/// # Returns
/// * `Ok(S)` - The service
/// * `Err(AppError)` - If the HTTP client could not be created
pub fn create_service<S, F>(
    build: F,
    base_path: &str,
    auth_provider: Option<Arc<dyn AuthProvider>>,
    config: Option<HttpClientConfig>,
    include_credentials: bool,
) -> Result<S, AppError>
where
    F: FnOnce(Arc<Transport>, HttpClientConfig) -> S,
{
    let mut factory = ServiceFactory::new(base_path).include_credentials(include_credentials);
    if let Some(provider) = auth_provider {
        factory = factory.auth_provider(provider);
    }
    if let Some(config) = config {
        factory = factory.config(config);
    }
    factory.build(build)
}

/// Creates a service from an environment-loaded [`Config`]
pub fn create_service_from_config<S, F>(
    build: F,
    config: &Config,
    auth_provider: Option<Arc<dyn AuthProvider>>,
) -> Result<S, AppError>
where
    F: FnOnce(Arc<Transport>, HttpClientConfig) -> S,
{
    create_service(
        build,
        &config.base_path,
        auth_provider,
        Some(config.http.clone()),
        config.include_credentials,
    )
}

/// Fluent builder behind [`create_service`]
pub struct ServiceFactory {
    base_path: String,
    auth_provider: Option<Arc<dyn AuthProvider>>,
    config: HttpClientConfig,
    include_credentials: bool,
    default_headers: HeaderMap,
}

impl ServiceFactory {
    /// Starts a factory for `base_path` with the default configuration
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            auth_provider: None,
            config: HttpClientConfig::default(),
            include_credentials: false,
            default_headers: HeaderMap::new(),
        }
    }

    /// Set the provider logged out on `401` responses
    #[must_use]
    pub fn auth_provider(mut self, provider: Arc<dyn AuthProvider>) -> Self {
        self.auth_provider = Some(provider);
        self
    }

    /// Set the transport and façade options
    #[must_use]
    pub fn config(mut self, config: HttpClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep and resend cookies
    #[must_use]
    pub fn include_credentials(mut self, include: bool) -> Self {
        self.include_credentials = include;
        self
    }

    /// Add a header sent with every request of the service
    #[must_use]
    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Builds the transport and hands it to `build`
    pub fn build<S, F>(self, build: F) -> Result<S, AppError>
    where
        F: FnOnce(Arc<Transport>, HttpClientConfig) -> S,
    {
        let timeout = self.config.effective_timeout();
        let transport = Transport::builder(self.base_path)
            .timeout(timeout)
            .with_credentials(self.include_credentials)
            .default_headers(self.default_headers)
            .interceptor(Arc::new(UnauthorizedInterceptor::new(self.auth_provider)))
            .build()?;

        info!(
            "Created service for {} (timeout {:?}, credentials {})",
            transport.base_url(),
            timeout,
            transport.with_credentials()
        );
        Ok(build(Arc::new(transport), self.config))
    }
}

/// Minimal service exposing the request façade
///
/// Generated API clients usually wrap this type and add one method per
/// endpoint.
#[derive(Debug, Clone)]
pub struct Api {
    /// Request façade
    pub http: HttpClient,
}

impl Api {
    /// Creates the service; fits the builder signature of [`create_service`]
    pub fn new(transport: Arc<Transport>, config: HttpClientConfig) -> Self {
        Self {
            http: HttpClient::new(transport, config),
        }
    }
}
