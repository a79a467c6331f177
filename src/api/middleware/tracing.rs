//! Request logging for the HTTP surface.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the request tracing layer.
///
/// Every request gets an `INFO` span with method, URI and version, and an
/// `INFO` line on response with status and latency in milliseconds. A 5xx
/// response (mostly 502 when the rating source fails) is additionally logged
/// at `WARN`, matching the level the rating service uses for upstream errors.
///
/// ```text
/// INFO request{method=GET uri=/imdb/tt0434665/season/1/episode/5/rating version=HTTP/1.1}: finished processing request latency=612 ms status=200
/// WARN request{method=GET uri=/imdb/tt0434665/rating version=HTTP/1.1}: response failed classification=Status code: 502 Bad Gateway latency=10003 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
