//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Subscriber setup (text or JSON lines, `RUST_LOG` aware)
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::{Config, LogFormat};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing target used for access log lines
pub const ACCESS_TARGET: &str = "access";

/// Initialize the global tracing subscriber
///
/// Should be called once at application startup. `RUST_LOG` takes
/// precedence over the configured level.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .json(),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("======================================");
    tracing::info!("hello-clock started");
    tracing::info!("Listening on: http://{addr}");
    tracing::info!("Log level: {}", config.effective_log_level());
    if config.server.debug {
        tracing::info!("Debug mode: on");
    }
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if let Some(max_conn) = config.performance.max_connections {
        tracing::info!("Max connections: {max_conn}");
    }
    tracing::info!("======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!(%peer_addr, "[Connection] Accepted");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("[WARN] {message}");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        tracing::debug!("[Headers] Count: {count}");
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}

pub fn log_shutdown_requested(signal: &str) {
    tracing::info!("[Shutdown] {signal} received, no longer accepting connections");
}

pub fn log_shutdown_complete(active: usize) {
    tracing::info!("[Shutdown] Listener closed ({active} connections still finishing)");
}
