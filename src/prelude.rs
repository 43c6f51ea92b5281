/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types, functions and re-exports in one import.
//!
//! ```rust
//! use api_base::prelude::*;
//!
//! let config = HttpClientConfig::new().with_square_brackets(true);
//! let api = create_service(Api::new, "https://api.example.com", None, Some(config), false);
//! assert!(api.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration
pub use crate::application::config::{Config, HttpClientConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

/// Failure wrapping
pub use crate::application::error_handler::{
    ErrorHandler, Recovered, Wrapped, handle_error, log_error, wrap_with_handler,
    wrap_with_handler_or,
};

// ============================================================================
// SERVICES AND AUTHENTICATION
// ============================================================================

/// Service construction
pub use crate::application::service::{
    Api, ServiceFactory, create_service, create_service_from_config,
};

/// Auth provider and interceptor
pub use crate::application::auth::{AuthProvider, SpawnedLogout, UnauthorizedInterceptor};

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Request façade
pub use crate::client::HttpClient;

/// Transport and interceptor trait
pub use crate::model::http::{ResponseInterceptor, Transport, TransportBuilder, TransportRequest};

/// Request models
pub use crate::model::requests::{
    ContentType, QueryParams, RequestBody, RequestOptions, RequestParams, ResponseFormat,
};

/// Form models
pub use crate::model::form::{FieldValue, FilePart, FormData, FormEntry, FormFields};

/// Response models
pub use crate::model::responses::{ApiResponse, ResponseData};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::json;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in the public API
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
pub use reqwest::{Method, StatusCode};
