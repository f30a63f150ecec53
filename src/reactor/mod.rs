//! Single-threaded readiness-driven event loop.
//!
//! One `mio::Poll` multiplexes the listening socket and every client
//! socket; the poll call is the only place the thread blocks. All sockets
//! are non-blocking and registrations are edge-triggered, so the accept
//! path drains the listener until WouldBlock — a readiness event fires on
//! the transition to ready and will not repeat while pending work remains
//! unconsumed.
//!
//! There is no idle timeout: a client that connects and never sends holds
//! its registration slot until it closes. That matches the single-shot
//! protocol this serves and is a documented limitation, not an oversight.

mod conn;

pub use conn::{handle_request, Disposition, REQUEST_BUFFER_SIZE};

use crate::config::Config;
use crate::net;
use mio::net::{TcpListener, TcpStream};
use mio::{Events, Interest, Poll, Token};
use slab::Slab;
use std::io;
use std::net::SocketAddr;
use tracing::{debug, error, info, warn};

/// Reserved token for the listening socket. Slab keys start at zero and
/// stay below capacity, so they can never collide with it.
const LISTENER: Token = Token(usize::MAX);

/// The event loop: owns the poll instance, the listener, and the table of
/// registered client sockets.
pub struct Reactor {
    poll: Poll,
    listener: TcpListener,
    connections: Slab<TcpStream>,
    max_connections: usize,
    max_events: usize,
}

impl Reactor {
    /// Bind the dual-stack listener and register it for read readiness.
    ///
    /// Any failure here (socket, bind, listen, poll creation, registration)
    /// is a startup failure and propagates to the caller.
    pub fn new(config: &Config) -> io::Result<Self> {
        let std_listener = net::bind_dual_stack(config.port, true)?;
        let mut listener = TcpListener::from_std(std_listener);

        let poll = Poll::new()?;
        poll.registry()
            .register(&mut listener, LISTENER, Interest::READABLE)?;

        Ok(Self {
            poll,
            listener,
            connections: Slab::with_capacity(config.max_connections),
            max_connections: config.max_connections,
            max_events: config.max_events,
        })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the event loop until the poll call fails.
    ///
    /// Per-connection failures are contained: they close that connection
    /// and the loop keeps running. Only a poll error returns.
    pub fn run(&mut self) -> io::Result<()> {
        let mut events = Events::with_capacity(self.max_events);
        info!(addr = %self.local_addr()?, "reactor listening");

        loop {
            self.poll.poll(&mut events, None)?;

            for event in events.iter() {
                match event.token() {
                    LISTENER => self.accept_ready(),
                    token => self.connection_ready(token),
                }
            }
        }
    }

    /// Drain every pending inbound connection.
    ///
    /// Edge-triggered registration means the listener will not signal again
    /// for connections already in the backlog, so accept must loop until
    /// WouldBlock. Registration failure closes just that connection and
    /// draining continues; any other accept error ends draining for this
    /// event without touching the listener.
    fn accept_ready(&mut self) {
        loop {
            match self.listener.accept() {
                Ok((mut stream, peer)) => {
                    if self.connections.len() >= self.max_connections {
                        warn!(peer = %peer, "connection table full, dropping connection");
                        continue;
                    }

                    let entry = self.connections.vacant_entry();
                    let token = Token(entry.key());

                    if let Err(e) =
                        self.poll
                            .registry()
                            .register(&mut stream, token, Interest::READABLE)
                    {
                        warn!(peer = %peer, error = %e, "register failed, dropping connection");
                        continue;
                    }

                    entry.insert(stream);
                    debug!(conn = token.0, peer = %peer, "accepted connection");
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => {
                    error!(error = %e, "accept failed");
                    break;
                }
            }
        }
    }

    /// Dispatch a readiness event for a client socket.
    ///
    /// A stale token (connection already closed within this poll batch) is
    /// ignored.
    fn connection_ready(&mut self, token: Token) {
        let Some(stream) = self.connections.get_mut(token.0) else {
            return;
        };

        match conn::handle_request(stream) {
            Disposition::KeepOpen => {}
            Disposition::Close => self.close(token),
        }
    }

    /// Deregister and drop a connection. Dropping the stream closes it.
    fn close(&mut self, token: Token) {
        if self.connections.contains(token.0) {
            let mut stream = self.connections.remove(token.0);
            let _ = self.poll.registry().deregister(&mut stream);
            debug!(conn = token.0, "connection closed");
        }
    }
}
