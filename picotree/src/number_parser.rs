// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::parse_error::{ErrorKind, ParseError};
use crate::slice_input_buffer::SliceInputBuffer;

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Returns the length of the longest numeric prefix of `bytes`, if there is one.
///
/// Grammar: optional sign, integer part, optional `.` + digits, optional
/// `e`/`E` + optional sign + digits. A fraction or exponent without digits is
/// left unconsumed. In strict mode the sign must be `-` and a leading zero
/// ends the integer part.
pub fn scan_number(bytes: &[u8], strict: bool) -> Option<usize> {
    let mut len = match bytes.first() {
        Some(b'-') => 1,
        Some(b'+') if !strict => 1,
        _ => 0,
    };

    let rest = bytes.get(len..)?;
    let int_digits = match rest.first() {
        Some(b'0') if strict => 1,
        Some(b) if b.is_ascii_digit() => count_digits(rest),
        _ => return None,
    };
    len += int_digits;

    if bytes.get(len) == Some(&b'.') {
        let frac_digits = count_digits(bytes.get(len + 1..).unwrap_or(&[]));
        if frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp_len = 1;
        if matches!(bytes.get(len + exp_len), Some(b'+' | b'-')) {
            exp_len += 1;
        }
        let exp_digits = count_digits(bytes.get(len + exp_len..).unwrap_or(&[]));
        if exp_digits > 0 {
            len += exp_len + exp_digits;
        }
    }

    Some(len)
}

/// Parses a float byte slice with the host float parser, rejecting overflow to infinity.
/// JSON numbers are pure ASCII, so a UTF-8 failure means the slice was not a number.
pub fn parse_float(bytes: &[u8]) -> Option<f64> {
    let s = core::str::from_utf8(bytes).ok()?;
    match f64::from_str(s) {
        Ok(val) if val.is_finite() => Some(val),
        _ => None,
    }
}

/// Consumes a number at the cursor and returns its decoded value.
///
/// On failure nothing is consumed and the error is `InvalidValue`.
pub fn parse_number(input: &mut SliceInputBuffer<'_>, strict: bool) -> Result<f64, ParseError> {
    let start = input.current_pos();
    let remaining = input.remaining();

    let Some(len) = scan_number(remaining, strict) else {
        return ParseError::at(ErrorKind::InvalidValue, start);
    };
    let Some(value) = remaining.get(..len).and_then(parse_float) else {
        return ParseError::at(ErrorKind::InvalidValue, start);
    };

    log::trace!("number {value} from {len} bytes at {start}");
    input.advance(len);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_scan_strict() {
        assert_eq!(scan_number(b"0", true), Some(1));
        assert_eq!(scan_number(b"-0", true), Some(2));
        assert_eq!(scan_number(b"-1.234E-10", true), Some(10));
        assert_eq!(scan_number(b"1e+5,", true), Some(4));
        assert_eq!(scan_number(b"42]", true), Some(2));
        // Leading zero ends the integer part
        assert_eq!(scan_number(b"0123", true), Some(1));
        assert_eq!(scan_number(b"+1", true), None);
    }

    #[test]
    fn test_scan_partial_fraction_and_exponent() {
        assert_eq!(scan_number(b"1.", true), Some(1));
        assert_eq!(scan_number(b"1.e5", true), Some(1));
        assert_eq!(scan_number(b"1e", true), Some(1));
        assert_eq!(scan_number(b"1e+", true), Some(1));
        assert_eq!(scan_number(b"2.5E", true), Some(3));
    }

    #[test]
    fn test_scan_rejects_non_numbers() {
        assert_eq!(scan_number(b"", true), None);
        assert_eq!(scan_number(b"-", true), None);
        assert_eq!(scan_number(b"+asd", true), None);
        assert_eq!(scan_number(b"-eeed2", true), None);
        assert_eq!(scan_number(b"-----2", true), None);
        assert_eq!(scan_number(b".5", true), None);
        assert_eq!(scan_number(b"x", false), None);
    }

    #[test]
    fn test_scan_lenient() {
        assert_eq!(scan_number(b"0123", false), Some(4));
        assert_eq!(scan_number(b"+1.5", false), Some(4));
        assert_eq!(scan_number(b"-007e2", false), Some(6));
        assert_eq!(scan_number(b"+", false), None);
    }

    #[test]
    fn test_parse_float_rejects_overflow() {
        assert_eq!(parse_float(b"1e400"), None);
        assert_eq!(parse_float(b"-1e400"), None);
        assert_eq!(parse_float(b"1.5"), Some(1.5));
    }

    #[test]
    fn test_parse_number_advances_cursor() {
        let mut input = SliceInputBuffer::new(b"-12.5e1 ]");
        assert_eq!(parse_number(&mut input, true), Ok(-125.0));
        assert_eq!(input.remaining(), b" ]");
    }

    #[test]
    fn test_parse_number_failure_consumes_nothing() {
        let mut input = SliceInputBuffer::new(b"  -x");
        input.skip_whitespace();
        let err = parse_number(&mut input, true).unwrap_err();
        assert_eq!(err, ParseError::new(ErrorKind::InvalidValue, 2));
        assert_eq!(input.current_pos(), 2);
    }

    #[test]
    fn test_lenient_leading_zeros_value() {
        let mut input = SliceInputBuffer::new(b"0123");
        assert_eq!(parse_number(&mut input, false), Ok(123.0));
        assert!(input.is_empty());
    }
}
