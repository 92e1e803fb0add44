//! Request dispatch: one GET, one parsed outcome, one delivery channel.

use super::sink::{self, CompletionSink, Delivery};
use crate::error::NewsApiError;
use crate::transport::HttpTransport;
use crate::{Error, ResponseFuture, Result};
use futures::FutureExt;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes requests against the transport and routes each outcome to the
/// caller's chosen delivery mode.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    transport: Arc<HttpTransport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Dispatch a GET to `url`, sending `credential` as the key header when given.
    ///
    /// With `Delivery::Sink` the request is spawned at once on the current
    /// Tokio runtime and the returned future only mirrors the outcome already
    /// handed to the sink.
    pub fn dispatch(
        &self,
        url: String,
        credential: Option<Arc<str>>,
        delivery: Delivery,
    ) -> ResponseFuture {
        let transport = Arc::clone(&self.transport);
        let request = async move { execute(&transport, &url, credential.as_deref()).await };

        match delivery {
            Delivery::Future => request.boxed(),
            Delivery::Sink(sink) => settle_through_sink(request, sink),
        }
    }
}

async fn execute(transport: &HttpTransport, url: &str, credential: Option<&str>) -> Result<Value> {
    debug!(url, authenticated = credential.is_some(), "dispatching request");

    let raw = transport.get(url, credential).await?;
    let body: Value = serde_json::from_str(&raw.body)?;
    check_envelope(body, raw.status)
}

/// Split a parsed body into success data or a normalized remote error.
///
/// Only `"status": "error"` is a failure; the HTTP status is recorded but not
/// consulted.
pub fn check_envelope(body: Value, http_status: u16) -> Result<Value> {
    if body.get("status").and_then(Value::as_str) == Some("error") {
        let err = NewsApiError::from_envelope(&body).with_http_status(http_status);
        warn!(code = %err.code, http_status, "remote returned an error envelope");
        return Err(err.into());
    }
    Ok(body)
}

fn settle_through_sink<F>(request: F, sink: Box<dyn CompletionSink>) -> ResponseFuture
where
    F: Future<Output = Result<Value>> + Send + 'static,
{
    let run = async move {
        let outcome = request.await;
        sink::deliver(sink, &outcome);
        outcome
    };

    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            let task = handle.spawn(run);
            async move {
                match task.await {
                    Ok(outcome) => outcome,
                    Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                    Err(e) => Err(Error::Runtime {
                        message: format!("request task did not complete: {e}"),
                    }),
                }
            }
            .boxed()
        }
        Err(_) => {
            debug!("no tokio runtime; request runs when the returned future is polled");
            run.boxed()
        }
    }
}
