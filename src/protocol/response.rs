//! Response building.
//!
//! Exactly two response shapes exist: a 200 carrying the decimal result,
//! and a 404 with a fixed diagnostic body. Both carry a correct
//! Content-Length and are written in one piece; nothing is streamed.

use bytes::BytesMut;

/// Fixed body for requests missing the query prefix.
pub const NOT_FOUND_BODY: &str = "Not Found or Invalid Query";

/// Build the success response for an evaluated result.
pub fn success(result: i32) -> BytesMut {
    let body = result.to_string();
    let mut buf = BytesMut::with_capacity(96);
    buf.extend_from_slice(
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        )
        .as_bytes(),
    );
    buf
}

/// Build the failure response for an invalid request.
pub fn not_found() -> BytesMut {
    let mut buf = BytesMut::with_capacity(96);
    buf.extend_from_slice(
        format!(
            "HTTP/1.1 404 Not Found\r\nContent-Length: {}\r\n\r\n{}",
            NOT_FOUND_BODY.len(),
            NOT_FOUND_BODY
        )
        .as_bytes(),
    );
    buf
}
