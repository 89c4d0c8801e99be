// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use crate::parse_error::{ErrorKind, ParseError};
use crate::slice_input_buffer::SliceInputBuffer;

/// Consumes one of the fixed tokens `null`, `true` or `false`.
///
/// The dispatcher has already matched the leading byte. If the rest does not
/// match exactly, only the leading byte is consumed.
pub fn parse_literal(input: &mut SliceInputBuffer<'_>, literal: &[u8]) -> Result<(), ParseError> {
    let Some((&first, rest)) = literal.split_first() else {
        return Ok(());
    };
    let start = input.current_pos();
    input.consume_expected(first);

    if !input.remaining().starts_with(rest) {
        return ParseError::at(ErrorKind::InvalidValue, start);
    }
    input.advance(rest.len());
    Ok(())
}

/// Consumes a quoted string and returns its content.
///
/// Content is copied verbatim; escape sequences are not decoded. A backslash
/// keeps the byte after it inside the string, so `\"` does not terminate it.
pub fn parse_string(input: &mut SliceInputBuffer<'_>) -> Result<String, ParseError> {
    let start = input.current_pos();
    input.consume_expected(b'"');

    let content = input.remaining();
    let mut idx = 0;
    while let Some(&byte) = content.get(idx) {
        match byte {
            b'"' => {
                let text = content
                    .get(..idx)
                    .and_then(|raw| core::str::from_utf8(raw).ok());
                let Some(text) = text else {
                    return ParseError::at(ErrorKind::InvalidValue, start);
                };
                input.advance(idx + 1);
                return Ok(String::from(text));
            }
            b'\\' => idx += 2,
            _ => idx += 1,
        }
    }

    ParseError::at(ErrorKind::MissingClosingQuote, start)
}
