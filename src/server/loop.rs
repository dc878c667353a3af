// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept loop for the application listener
///
/// Runs until `state.shutdown` is notified, then drops the listener.
/// Connections already being served finish in their own tasks.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = Arc::clone(&state.shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_shutdown_complete(state.connection_count());
}

/// Wait until in-flight connections finish or `grace` elapses
///
/// Returns the number of connections still open when it gave up.
pub async fn wait_for_connections(state: &AppState, grace: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + grace;
    while state.connection_count() > 0 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
    state.connection_count()
}
