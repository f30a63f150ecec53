//! Left-to-right arithmetic evaluator.
//!
//! Evaluates a decimal-and-operator string strictly in textual order with
//! no operator precedence and no parentheses: `2+3*4` is `(2+3)*4 = 20`.
//! The evaluator is deliberately forgiving: it computes as much as it can
//! and returns the running total when it hits something it cannot parse.
//!
//! Documented quirks, kept on purpose:
//! - division by zero yields exactly 0, discarding the partial total;
//! - accumulation is wrapping i32 arithmetic, overflow is silent;
//! - unrecognized operator bytes are skipped as no-ops.

/// Evaluate an expression from a byte slice.
///
/// The initial signed integer becomes the running total (an empty or
/// non-numeric slice yields 0). Then, repeatedly: read one operator byte;
/// if the byte after it is not an ASCII digit, stop and return the total so
/// far; otherwise parse the next integer and apply the operator. Scanning
/// also stops at a space, which ends the expression in a request line.
///
/// The cursor advances on every loop iteration (one byte for the operator,
/// at least one digit for the operand), so evaluation always terminates.
pub fn evaluate(expr: &[u8]) -> i32 {
    let (mut total, mut cursor) = scan_int(expr, 0);

    while cursor < expr.len() && expr[cursor] != b' ' {
        let op = expr[cursor];
        cursor += 1;

        if cursor >= expr.len() || !expr[cursor].is_ascii_digit() {
            break;
        }
        let (operand, next) = scan_int(expr, cursor);
        cursor = next;

        match op {
            b'+' => total = total.wrapping_add(operand),
            b'-' => total = total.wrapping_sub(operand),
            b'*' => total = total.wrapping_mul(operand),
            b'/' => {
                if operand == 0 {
                    return 0;
                }
                total = total.wrapping_div(operand);
            }
            _ => {} // unrecognized operator, no-op
        }
    }

    total
}

/// Scan a signed decimal integer starting at `cursor`.
///
/// Returns the parsed value and the cursor position after the last digit
/// consumed. If no digits are found the value is 0 and the cursor is
/// unchanged. A leading sign is only consumed when a digit follows it.
fn scan_int(buf: &[u8], cursor: usize) -> (i32, usize) {
    let mut pos = cursor;
    let mut negative = false;

    if pos < buf.len() && (buf[pos] == b'-' || buf[pos] == b'+') {
        if pos + 1 < buf.len() && buf[pos + 1].is_ascii_digit() {
            negative = buf[pos] == b'-';
            pos += 1;
        } else {
            return (0, cursor);
        }
    }

    if pos >= buf.len() || !buf[pos].is_ascii_digit() {
        return (0, cursor);
    }

    let mut value: i32 = 0;
    while pos < buf.len() && buf[pos].is_ascii_digit() {
        value = value.wrapping_mul(10).wrapping_add((buf[pos] - b'0') as i32);
        pos += 1;
    }

    if negative {
        value = value.wrapping_neg();
    }
    (value, pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate(b"42"), 42);
        assert_eq!(evaluate(b"-7"), -7);
        assert_eq!(evaluate(b"+9"), 9);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(evaluate(b""), 0);
        assert_eq!(evaluate(b"abc"), 0);
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        assert_eq!(evaluate(b"2+3*4"), 20);
        assert_eq!(evaluate(b"100+50*2-10"), 290);
        assert_eq!(evaluate(b"10-2*3"), 24);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(evaluate(b"7/2"), 3);
        assert_eq!(evaluate(b"0-7/2"), -3);
    }

    #[test]
    fn test_division_by_zero_discards_total() {
        assert_eq!(evaluate(b"10/0"), 0);
        assert_eq!(evaluate(b"10/0+5"), 0);
        assert_eq!(evaluate(b"100+50/0-10"), 0);
    }

    #[test]
    fn test_trailing_garbage_truncates() {
        assert_eq!(evaluate(b"5+3abc"), 8);
        assert_eq!(evaluate(b"7+"), 7);
        assert_eq!(evaluate(b"5+-3"), 5);
    }

    #[test]
    fn test_stops_at_space() {
        assert_eq!(evaluate(b"5+3 HTTP/1.1"), 8);
        assert_eq!(evaluate(b" 5+3"), 0);
    }

    #[test]
    fn test_unknown_operator_is_noop() {
        assert_eq!(evaluate(b"5#3"), 5);
        assert_eq!(evaluate(b"5#3+1"), 6);
    }

    #[test]
    fn test_wrapping_overflow() {
        assert_eq!(evaluate(b"2147483647+1"), i32::MIN);
    }

    #[test]
    fn test_scan_int_cursor_advance() {
        assert_eq!(scan_int(b"123+4", 0), (123, 3));
        assert_eq!(scan_int(b"123+4", 4), (4, 5));
        // no digits: cursor stays put
        assert_eq!(scan_int(b"x", 0), (0, 0));
    }
}
