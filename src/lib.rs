/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # api-base
//!
//! Shared plumbing for HTTP API service clients built on top of `reqwest`.
//!
//! A service is created through [`application::service::create_service`], which
//! builds one [`model::http::Transport`] for a base path, installs the
//! unauthorized-response interceptor and hands the transport to a builder
//! function. Services then talk to the API through the [`client::HttpClient`]
//! façade, which merges request options, prepares form bodies and delegates to
//! the transport.
//!
//! ```ignore
//! use api_base::prelude::*;
//!
//! let api = create_service(Api::new, "https://api.example.com", None, None, false)?;
//! let pets = api.http.get("/pets", RequestParams::new()).await?;
//! ```

/// Service factory, auth provider, configuration and failure handling
pub mod application;
/// Request façade exposing per-verb helpers
pub mod client;
/// Library-wide constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Transport, request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
