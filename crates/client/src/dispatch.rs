//! Soft-failure request dispatch.
//!
//! [`Dispatcher`] never returns an error: every request settles into a
//! [`DispatchOutcome`], and a failed request carries the failure response (or
//! what went wrong instead) as its value.

use futures::future::LocalBoxFuture;
use serde::Serialize;
use thiserror::Error;

use crate::transport::{HttpResponse, Transport, TransportError};

/// Why a dispatched request did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum DispatchFailure {
    /// The server answered with a non-2xx status.
    #[error("server responded with status {}", .0.status)]
    Status(HttpResponse),
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The payload could not be encoded as JSON; nothing was sent.
    #[error("failed to encode payload: {0}")]
    Encode(String),
}

/// Settled result of a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DispatchOutcome {
    Success(HttpResponse),
    Failure(DispatchFailure),
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success(_))
    }

    /// The server's response, whether it was a success or a failure status.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            DispatchOutcome::Success(resp) => Some(resp),
            DispatchOutcome::Failure(DispatchFailure::Status(resp)) => Some(resp),
            DispatchOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&DispatchFailure> {
        match self {
            DispatchOutcome::Success(_) => None,
            DispatchOutcome::Failure(failure) => Some(failure),
        }
    }

    fn settle(result: Result<HttpResponse, TransportError>) -> Self {
        match result {
            Ok(resp) if resp.is_success() => DispatchOutcome::Success(resp),
            Ok(resp) => DispatchOutcome::Failure(DispatchFailure::Status(resp)),
            Err(err) => DispatchOutcome::Failure(err.into()),
        }
    }
}

/// Issues one request per call over a [`Transport`].
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `payload` as JSON to `url`.
    pub async fn post<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> DispatchOutcome {
        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => return DispatchOutcome::Failure(DispatchFailure::Encode(e.to_string())),
        };
        DispatchOutcome::settle(self.transport.post_json(url, body).await)
    }

    /// GET `url`.
    pub async fn get(&self, url: &str) -> DispatchOutcome {
        DispatchOutcome::settle(self.transport.get(url).await)
    }
}

/// Deferred POST of a validated form.
///
/// Nothing happens until the task is awaited or handed to an executor
/// (`spawn_local` in the browser); the form handler that created it has
/// already returned by then. Not `Send`: the browser's fetch futures are not.
pub type DispatchTask = LocalBoxFuture<'static, DispatchOutcome>;

/// Log a settled request. Transport failures have no UI surface; this is
/// where they end up.
pub(crate) fn log_outcome(method: &str, url: &str, outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::Success(resp) => {
            tracing::info!("{} {} succeeded with status {}", method, url, resp.status);
        }
        DispatchOutcome::Failure(failure) => {
            tracing::warn!("{} {} failed: {}", method, url, failure);
        }
    }
}
