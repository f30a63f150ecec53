//! calcd: the readiness-driven calculator server.
//!
//! Binds a dual-stack listener on the configured port and runs the
//! single-threaded reactor until the poll call fails.

use calcd::config::Config;
use calcd::reactor::Reactor;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        port = config.port,
        max_events = config.max_events,
        max_connections = config.max_connections,
        "Starting calcd server"
    );

    let mut reactor = Reactor::new(&config)?;
    reactor.run()?;
    Ok(())
}
