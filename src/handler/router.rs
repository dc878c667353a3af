//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: route lookup, method validation,
//! one clock reading per request, and access logging.

use crate::config::AppState;
use crate::handler::routes::Route;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Request bodies are never read, so any body type is accepted.
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let now = Local::now();

    logger::log_headers_count(req.headers().len(), state.config.show_headers());

    let response = dispatch(req.method(), req.uri().path(), now);
    let response = http::with_server_header(response, &state.config.http.server_name);

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::from_request(
            &peer_addr,
            req.method(),
            req.uri(),
            req.version(),
            req.headers(),
            now,
        );
        entry.status = response.status().as_u16();
        entry.body_bytes = body_len(&response);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve path first, then method: unknown paths are 404 for every method
fn dispatch(method: &Method, path: &str, now: chrono::DateTime<Local>) -> Response<Full<Bytes>> {
    let Some(route) = Route::from_path(path) else {
        tracing::debug!(%method, path, "no route");
        return http::build_404_response();
    };

    match *method {
        Method::GET => route.respond(now),
        Method::HEAD => http::strip_body(route.respond(now)),
        Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            http::build_405_response()
        }
    }
}

fn body_len(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}
