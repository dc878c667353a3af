// Application state module
// Immutable configuration plus the connection counter and shutdown signal
// shared by all connections

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,

    /// Live connection count
    pub active_connections: AtomicUsize,

    /// Notified once when the server should stop accepting
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            active_connections: AtomicUsize::new(0),
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_reflects_config() {
        let mut cfg = Config::load_from("does-not-exist/hello-clock").unwrap();
        cfg.logging.access_log = false;
        let state = AppState::new(&cfg);
        assert!(!state.access_log_enabled());
        assert_eq!(state.connection_count(), 0);

        state.active_connections.fetch_add(2, Ordering::SeqCst);
        assert_eq!(state.connection_count(), 2);
    }
}
