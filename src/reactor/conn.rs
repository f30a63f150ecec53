//! Per-connection request handling.
//!
//! One readiness event drives at most one full request/response cycle. The
//! protocol is single-shot, so no partial-request state survives between
//! events: either no data was consumed (WouldBlock) or the connection is
//! done and closes.

use crate::protocol::{evaluate, frame_expression, response};
use std::io::{self, Read, Write};
use tracing::{debug, warn};

/// Capacity of the per-cycle request buffer.
pub const REQUEST_BUFFER_SIZE: usize = 1024;

/// What the reactor should do with the connection after a handling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// No data was available; leave the registration in place.
    KeepOpen,
    /// Exchange finished or failed; deregister and drop the socket.
    Close,
}

/// Drive one receive → frame → evaluate → respond cycle.
///
/// The stream must be non-blocking when called from the reactor; a blocking
/// stream also works (the WouldBlock arm is then simply never taken), which
/// is how the synchronous server reuses this.
///
/// Exactly one read and at most one write are attempted. A short write or
/// write error is logged and not retried; the connection closes regardless
/// of send outcome.
pub fn handle_request<S: Read + Write>(stream: &mut S) -> Disposition {
    let mut request = [0u8; REQUEST_BUFFER_SIZE];

    let received = match stream.read(&mut request) {
        Ok(0) => {
            debug!("peer closed connection before sending");
            return Disposition::Close;
        }
        Ok(n) => n,
        Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
            // Data not ready yet; the next edge transition will re-notify
            return Disposition::KeepOpen;
        }
        Err(e) => {
            warn!(error = %e, "recv failed");
            return Disposition::Close;
        }
    };

    let response = match frame_expression(&request[..received]) {
        Some(expr) => {
            let result = evaluate(expr);
            debug!(received, result, "expression evaluated");
            response::success(result)
        }
        None => {
            debug!(received, "query prefix not found");
            response::not_found()
        }
    };

    match stream.write(&response) {
        Ok(n) if n < response.len() => {
            warn!(sent = n, total = response.len(), "short write, response truncated");
        }
        Ok(_) => debug!("response sent"),
        Err(e) => debug!(error = %e, "send failed"),
    }

    Disposition::Close
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted stream: each call to `read` pops the next outcome, writes
    /// are captured.
    struct ScriptedStream {
        reads: Vec<io::Result<Vec<u8>>>,
        written: Vec<u8>,
    }

    impl ScriptedStream {
        fn new(reads: Vec<io::Result<Vec<u8>>>) -> Self {
            Self {
                reads,
                written: Vec::new(),
            }
        }
    }

    impl Read for ScriptedStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.reads.remove(0) {
                Ok(data) => {
                    buf[..data.len()].copy_from_slice(&data);
                    Ok(data.len())
                }
                Err(e) => Err(e),
            }
        }
    }

    impl Write for ScriptedStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_valid_request_closes_with_response() {
        let mut stream = ScriptedStream::new(vec![Ok(
            b"GET /calc?query=2+3*4 HTTP/1.1\r\n\r\n".to_vec()
        )]);
        assert_eq!(handle_request(&mut stream), Disposition::Close);
        assert_eq!(
            stream.written,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 2\r\n\r\n20"
        );
    }

    #[test]
    fn test_invalid_request_gets_404() {
        let mut stream = ScriptedStream::new(vec![Ok(b"GET / HTTP/1.1\r\n\r\n".to_vec())]);
        assert_eq!(handle_request(&mut stream), Disposition::Close);
        assert_eq!(
            stream.written,
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 26\r\n\r\nNot Found or Invalid Query"
        );
    }

    #[test]
    fn test_would_block_keeps_open_without_writing() {
        let mut stream = ScriptedStream::new(vec![Err(io::Error::new(
            io::ErrorKind::WouldBlock,
            "not ready",
        ))]);
        assert_eq!(handle_request(&mut stream), Disposition::KeepOpen);
        assert!(stream.written.is_empty());
    }

    #[test]
    fn test_peer_close_detected() {
        let mut stream = ScriptedStream::new(vec![Ok(Vec::new())]);
        assert_eq!(handle_request(&mut stream), Disposition::Close);
        assert!(stream.written.is_empty());
    }

    #[test]
    fn test_receive_error_closes() {
        let mut stream = ScriptedStream::new(vec![Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "reset",
        ))]);
        assert_eq!(handle_request(&mut stream), Disposition::Close);
        assert!(stream.written.is_empty());
    }

    #[test]
    fn test_division_by_zero_is_200_with_zero_body() {
        let mut stream = ScriptedStream::new(vec![Ok(
            b"GET /calc?query=10/0+5 HTTP/1.1\r\n\r\n".to_vec()
        )]);
        handle_request(&mut stream);
        assert_eq!(
            stream.written,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 1\r\n\r\n0"
        );
    }
}
