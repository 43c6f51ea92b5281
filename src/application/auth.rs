/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Logout on unauthorized responses
//!
//! A service created with an [`AuthProvider`] gets an
//! [`UnauthorizedInterceptor`] installed on its transport. Whenever a request
//! fails with `401 Unauthorized` the provider's `logout` is called and the
//! original error is still returned to the caller.

use crate::error::AppError;
use crate::model::http::ResponseInterceptor;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Capability to end the current user session
///
/// `logout` is fire-and-forget: callers never wait for it to complete.
/// Implementations that need to do async work should spawn it, see
/// [`SpawnedLogout`].
pub trait AuthProvider: Send + Sync {
    /// Ends the current session
    fn logout(&self);
}

impl<F> AuthProvider for F
where
    F: Fn() + Send + Sync,
{
    fn logout(&self) {
        self()
    }
}

/// Auth provider whose logout is an async task spawned on the tokio runtime
pub struct SpawnedLogout<F> {
    logout: F,
}

impl<F, Fut> SpawnedLogout<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    /// Wraps an async logout routine
    pub fn new(logout: F) -> Self {
        Self { logout }
    }
}

impl<F, Fut> AuthProvider for SpawnedLogout<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn logout(&self) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn((self.logout)());
            }
            Err(_) => warn!("No tokio runtime available, logout skipped"),
        }
    }
}

/// Response interceptor that calls [`AuthProvider::logout`] on `401` errors
///
/// Successful responses pass through untouched and every error is returned
/// unchanged; the logout is only a side effect.
pub struct UnauthorizedInterceptor {
    auth_provider: Option<Arc<dyn AuthProvider>>,
}

impl UnauthorizedInterceptor {
    /// Creates the interceptor. Without a provider it is a pass-through.
    pub fn new(auth_provider: Option<Arc<dyn AuthProvider>>) -> Self {
        Self { auth_provider }
    }
}

#[async_trait]
impl ResponseInterceptor for UnauthorizedInterceptor {
    async fn on_error(&self, error: AppError) -> Result<ApiResponse, AppError> {
        if error.is_unauthorized() {
            match &self.auth_provider {
                Some(provider) => {
                    warn!("Unauthorized response, logging out");
                    provider.logout();
                }
                None => debug!("Unauthorized response and no auth provider configured"),
            }
        }
        Err(error)
    }
}
