//! Request/response logging around every route.

use axum::http::{Request, Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{MakeSpan, OnRequest, OnResponse, TraceLayer};
use tracing::{info, info_span, Span};

pub type RequestLoggerLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, LogRequest, LogResponse>;

/// Logs `Incoming request` on entry and `Completed request` with the status on exit.
/// Method and URI are span fields, so both lines carry them.
pub fn request_logger() -> RequestLoggerLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(LogRequest)
        .on_response(LogResponse)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        info_span!("request", method = %request.method(), uri = %request.uri())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogRequest;

impl<B> OnRequest<B> for LogRequest {
    fn on_request(&mut self, request: &Request<B>, _span: &Span) {
        info!("Incoming request: {} {}", request.method(), request.uri());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        info!(
            status = response.status().as_u16(),
            latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
            "Completed request"
        );
    }
}
