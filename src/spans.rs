//! Span creation helpers for DefiLlama requests.
//!
//! Telemetry stays out of the client code: each instrumented operation has a
//! helper here, and the client attaches the span with
//! [`tracing::Instrument`].
//!
//! Usage pattern:
//! ```rust,ignore
//! let span = spans::send_request(request.service(), request.method(), request.path());
//! async move { /* exchange */ }.instrument(span).await
//! ```

use tracing::Span;

use crate::request::{Method, Service};

/// Create span for one request built by an endpoint function.
///
/// `status` and `duration_ms` are recorded once the response arrives.
///
/// Parent: caller's span
/// Children: none
#[inline]
pub(crate) fn send_request(service: Service, method: Method, path: &str) -> Span {
    tracing::info_span!(
        "defillama.send_request",
        service = %service,
        method = %method,
        path = %path,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Create span for a raw GET of an absolute URL.
///
/// Parent: caller's span
/// Children: none
#[inline]
pub(crate) fn get_json(url: &str) -> Span {
    tracing::debug_span!(
        "defillama.get_json",
        url = %url,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}
