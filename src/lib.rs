//! calcd: a single-threaded HTTP calculator server.
//!
//! The server accepts TCP connections, reads one request per connection,
//! evaluates the arithmetic expression embedded in the query string, writes
//! one text response, and closes. Concurrency comes from a readiness-driven
//! event loop (epoll on Linux, kqueue on macOS via mio) with edge-triggered
//! notification and strictly non-blocking sockets.
//!
//! Features:
//! - Left-to-right expression evaluation with `+ - * /` (no precedence)
//! - Dual-stack listener: one IPv6 socket serving IPv4-mapped clients too
//! - Accept-until-exhausted draining as edge-triggered readiness requires
//! - Configuration via CLI arguments or TOML file

pub mod config;
pub mod net;
pub mod protocol;
pub mod reactor;
