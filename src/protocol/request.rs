//! Request framing.
//!
//! A request is valid iff the received bytes contain the literal prefix
//! `GET /calc?query=`. The expression is everything after the prefix up to
//! the first space (the HTTP version token ends the expression) or the
//! first NUL byte, whichever comes first.

/// The literal request-line prefix that marks a calculator query.
pub const QUERY_PREFIX: &[u8] = b"GET /calc?query=";

/// Locate the expression inside a raw request buffer.
///
/// Returns a borrowed subslice of `request`, or `None` when the prefix is
/// absent (the request is then answered with 404). The match is exact and
/// case-sensitive; anything before the prefix is ignored.
pub fn frame_expression(request: &[u8]) -> Option<&[u8]> {
    let start = find_subslice(request, QUERY_PREFIX)? + QUERY_PREFIX.len();
    let tail = &request[start..];
    let end = tail
        .iter()
        .position(|&b| b == b' ' || b == b'\0')
        .unwrap_or(tail.len());
    Some(&tail[..end])
}

/// Find the first occurrence of `needle` in `haystack`.
fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_request() {
        let req = b"GET /calc?query=2+3*4 HTTP/1.1\r\nHost: localhost\r\n\r\n";
        assert_eq!(frame_expression(req), Some(&b"2+3*4"[..]));
    }

    #[test]
    fn test_expression_runs_to_end_of_data() {
        assert_eq!(frame_expression(b"GET /calc?query=10-4"), Some(&b"10-4"[..]));
    }

    #[test]
    fn test_empty_expression() {
        let req = b"GET /calc?query= HTTP/1.1\r\n\r\n";
        assert_eq!(frame_expression(req), Some(&b""[..]));
    }

    #[test]
    fn test_missing_prefix_is_invalid() {
        assert_eq!(frame_expression(b"GET / HTTP/1.1\r\n\r\n"), None);
        assert_eq!(frame_expression(b"POST /calc?query=1+1 HTTP/1.1"), None);
        assert_eq!(frame_expression(b""), None);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(frame_expression(b"get /calc?query=1+1 HTTP/1.1"), None);
    }

    #[test]
    fn test_stops_at_nul() {
        // A zeroed receive buffer leaves NULs after the request bytes
        let mut buf = [0u8; 64];
        buf[..20].copy_from_slice(b"GET /calc?query=5+5 ");
        assert_eq!(frame_expression(&buf[..19]), Some(&b"5+5"[..]));
        assert_eq!(frame_expression(&buf), Some(&b"5+5"[..]));
    }
}
