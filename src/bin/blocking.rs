//! calcd-blocking: the synchronous variant of the calculator server.
//!
//! Accepts one connection at a time on a blocking dual-stack listener and
//! drives the same request handler the reactor uses. No concurrency at
//! all: a slow client stalls everyone behind it. Useful as a baseline and
//! for exercising the protocol path without the event loop.

use calcd::config::Config;
use calcd::net;
use calcd::reactor::handle_request;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let listener = net::bind_dual_stack(config.port, false)?;
    info!(port = config.port, "Starting blocking calcd server");

    loop {
        match listener.accept() {
            Ok((mut stream, peer)) => {
                debug!(peer = %peer, "accepted connection");
                // Single-shot exchange; the stream closes when dropped
                handle_request(&mut stream);
            }
            Err(e) => {
                error!(error = %e, "accept failed");
            }
        }
    }
}
