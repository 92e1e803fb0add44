//! Completion sinks: how a caller wants the outcome of a request delivered.

use crate::{Error, Result};
use serde_json::Value;

/// Receives the single outcome of a dispatched request.
///
/// Exactly one of the two methods is called, exactly once.
pub trait CompletionSink: Send {
    fn on_success(self: Box<Self>, data: &Value);
    fn on_error(self: Box<Self>, error: &Error);
}

type CallbackFn = Box<dyn FnOnce(std::result::Result<&Value, &Error>) + Send + 'static>;

/// A caller-supplied completion callback.
///
/// Receives `Ok(data)` on success and `Err(error)` on failure, the Rust form
/// of an `(error, data)` callback.
pub struct Callback(CallbackFn);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(std::result::Result<&Value, &Error>) + Send + 'static,
    {
        Callback(Box::new(f))
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl CompletionSink for Callback {
    fn on_success(self: Box<Self>, data: &Value) {
        let Callback(f) = *self;
        f(Ok(data))
    }

    fn on_error(self: Box<Self>, error: &Error) {
        let Callback(f) = *self;
        f(Err(error))
    }
}

/// Delivery mode for one call, fixed before dispatch begins.
pub enum Delivery {
    /// Settle only the returned future; the request runs when it is polled.
    Future,
    /// Run the request eagerly and report through the sink. The returned
    /// future mirrors the same outcome.
    Sink(Box<dyn CompletionSink>),
}

impl Delivery {
    pub fn from_callback(callback: Option<Callback>) -> Self {
        match callback {
            Some(cb) => Delivery::Sink(Box::new(cb)),
            None => Delivery::Future,
        }
    }

    pub fn is_sink(&self) -> bool {
        matches!(self, Delivery::Sink(_))
    }
}

impl std::fmt::Debug for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delivery::Future => f.write_str("Delivery::Future"),
            Delivery::Sink(_) => f.write_str("Delivery::Sink(..)"),
        }
    }
}

pub(crate) fn deliver(sink: Box<dyn CompletionSink>, outcome: &Result<Value>) {
    match outcome {
        Ok(data) => sink.on_success(data),
        Err(error) => sink.on_error(error),
    }
}
