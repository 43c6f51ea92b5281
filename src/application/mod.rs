/// Auth provider and unauthorized-response interceptor
pub mod auth;
/// Application configuration module
pub mod config;
/// Failure wrapping for async operations
pub mod error_handler;
/// Service factory
pub mod service;
