//! Listener construction.
//!
//! The server binds a single IPv6 socket to the wildcard address with
//! `IPV6_V6ONLY` disabled, so connections arriving over IPv4 show up as
//! IPv4-mapped IPv6 addresses on the same socket.

use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv6Addr, SocketAddr, TcpListener};

/// Listen backlog for the dual-stack listener.
const BACKLOG: i32 = 1024;

/// Create a dual-stack TCP listener bound to `[::]:port`.
///
/// The reactor wants a non-blocking socket (its accept loop must be able to
/// observe WouldBlock); the blocking server passes `nonblocking = false`.
pub fn bind_dual_stack(port: u16, nonblocking: bool) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::IPV6, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_only_v6(false)?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(nonblocking)?;

    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, port));
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    Ok(socket.into())
}
