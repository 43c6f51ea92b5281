/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Failure wrapping for async operations
//!
//! [`ErrorHandler`] runs a fallible async operation and turns any failure into
//! a successful outcome: the error is handed to a handler (usually for
//! logging) and the caller receives either a default value or
//! [`Recovered::Nothing`].
//!
//! **Errors never propagate past an `ErrorHandler`.** Use it only where a
//! failed call should degrade to a fallback instead of aborting the caller.
//!
//! ```ignore
//! let pets = ErrorHandler::new(log_error::<AppError>)
//!     .with_default(Vec::new)
//!     .run(api.list_pets())
//!     .await
//!     .into_option()
//!     .unwrap_or_default();
//! ```

use std::fmt::Display;
use std::future::Future;
use tracing::error;

type Handler<E> = Box<dyn Fn(E) + Send + Sync>;
type DefaultFactory<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Outcome of an operation run through an [`ErrorHandler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovered<T> {
    /// The operation succeeded with this value
    Value(T),
    /// The operation failed; this is the default factory's value
    Default(T),
    /// The operation failed and no default factory was configured
    Nothing,
}

impl<T> Recovered<T> {
    /// The operation's own value or the default, `None` for [`Recovered::Nothing`]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Recovered::Value(v) | Recovered::Default(v) => Some(v),
            Recovered::Nothing => None,
        }
    }

    /// Only the operation's own value
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Recovered::Value(v) => Some(v),
            _ => None,
        }
    }

    /// True when the operation succeeded
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Recovered::Value(_))
    }

    /// True when the operation failed, whether or not a default was produced
    #[must_use]
    pub fn is_recovered(&self) -> bool {
        !self.is_value()
    }
}

/// Runs operations and converts their failures into [`Recovered`] outcomes
pub struct ErrorHandler<T, E> {
    handler: Handler<E>,
    default: Option<DefaultFactory<T>>,
}

impl<T, E> ErrorHandler<T, E> {
    /// Creates a handler without default value
    pub fn new<H>(handler: H) -> Self
    where
        H: Fn(E) + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            default: None,
        }
    }

    /// Produce a fallback with `default` whenever the operation fails
    #[must_use]
    pub fn with_default<D>(mut self, default: D) -> Self
    where
        D: Fn() -> T + Send + Sync + 'static,
    {
        self.default = Some(Box::new(default));
        self
    }

    /// True when a default factory is configured
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Converts an already computed result
    ///
    /// On `Err` the handler is called once with the error before the default
    /// is built.
    pub fn recover(&self, result: Result<T, E>) -> Recovered<T> {
        match result {
            Ok(value) => Recovered::Value(value),
            Err(e) => {
                (self.handler)(e);
                match &self.default {
                    Some(default) => Recovered::Default(default()),
                    None => Recovered::Nothing,
                }
            }
        }
    }

    /// Awaits `operation` and converts its result
    pub async fn run<Fut>(&self, operation: Fut) -> Recovered<T>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        self.recover(operation.await)
    }

    /// Wraps an operation so every call goes through this handler
    ///
    /// Operations taking several arguments take them as a tuple.
    pub fn wrap<F>(self, operation: F) -> Wrapped<T, E, F> {
        Wrapped {
            operation,
            handler: self,
        }
    }
}

/// An operation bound to an [`ErrorHandler`]
pub struct Wrapped<T, E, F> {
    operation: F,
    handler: ErrorHandler<T, E>,
}

impl<T, E, F> Wrapped<T, E, F> {
    /// Calls the operation with `args`
    pub async fn call<A, Fut>(&self, args: A) -> Recovered<T>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.handler.run((self.operation)(args)).await
    }
}

/// Creates an [`ErrorHandler`] without default value
pub fn wrap_with_handler<T, E, H>(handler: H) -> ErrorHandler<T, E>
where
    H: Fn(E) + Send + Sync + 'static,
{
    ErrorHandler::new(handler)
}

/// Creates an [`ErrorHandler`] whose failures resolve to `default_factory()`
pub fn wrap_with_handler_or<T, E, H, D>(handler: H, default_factory: D) -> ErrorHandler<T, E>
where
    H: Fn(E) + Send + Sync + 'static,
    D: Fn() -> T + Send + Sync + 'static,
{
    ErrorHandler::new(handler).with_default(default_factory)
}

/// Awaits `operation`; on failure calls `handler` and returns `None`
pub async fn handle_error<T, E, H, Fut>(handler: H, operation: Fut) -> Option<T>
where
    H: FnOnce(E),
    Fut: Future<Output = Result<T, E>>,
{
    match operation.await {
        Ok(value) => Some(value),
        Err(e) => {
            handler(e);
            None
        }
    }
}

/// Handler that logs the error
pub fn log_error<E: Display>(error: E) {
    error!("Operation failed: {}", error);
}
