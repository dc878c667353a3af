use std::sync::Arc;
use std::time::Duration;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

use error::{Result, ServerError};

/// How long shutdown waits for in-flight connections
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;

    logger::init(&cfg);

    // Worker thread count follows server.workers, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    let result = runtime.block_on(async_main(cfg));
    if let Err(ref e) = result {
        logger::log_error(&e.to_string());
    }
    result
}

async fn async_main(cfg: config::Config) -> Result<()> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)
        .map_err(|source| ServerError::Bind { addr, source })?;

    let state = Arc::new(config::AppState::new(&cfg));
    server::start_signal_handler(Arc::clone(&state.shutdown))?;

    logger::log_server_start(&addr, &cfg);

    server::start_server_loop(listener, Arc::clone(&state)).await;

    let remaining = server::wait_for_connections(&state, SHUTDOWN_GRACE).await;
    if remaining > 0 {
        logger::log_warning(&format!(
            "Exiting with {remaining} connections still open after {}s grace period",
            SHUTDOWN_GRACE.as_secs()
        ));
    }

    Ok(())
}
