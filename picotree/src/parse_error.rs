// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// The kind of failure that ended a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was empty (or only whitespace) where a value was required.
    ExpectedValue,
    /// The next token does not match any value grammar.
    InvalidValue,
    /// A complete value was parsed but non-whitespace content follows it.
    RootNotSingular,
    /// A string was opened but the input ended before its closing quote.
    MissingClosingQuote,
    /// Arrays and objects were nested deeper than the configured limit.
    MaxDepthReached,
    /// An object repeated a key while duplicate keys are rejected.
    DuplicateKey,
}

impl ErrorKind {
    const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ExpectedValue => "expected a value",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::RootNotSingular => "unexpected content after the root value",
            ErrorKind::MissingClosingQuote => "missing closing quote",
            ErrorKind::MaxDepthReached => "maximum nesting depth reached",
            ErrorKind::DuplicateKey => "duplicate object key",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during JSON parsing
///
/// Carries the [`ErrorKind`] and the byte offset where the parser detected it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    position: usize,
}

impl ParseError {
    pub const fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Shorthand for returning an error from a parse routine.
    pub(crate) fn at<T>(kind: ErrorKind, position: usize) -> Result<T, Self> {
        log::debug!("parse error: {kind:?} at byte {position}");
        Err(Self::new(kind, position))
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input at which the error was detected.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            slice_input_buffer::Error::ReachedEnd(pos) => {
                ParseError::new(ErrorKind::ExpectedValue, pos)
            }
        }
    }
}

impl core::fmt::Debug for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?} at {}", self.kind, self.position)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.position)
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_accessors() {
        let error = ParseError::new(ErrorKind::RootNotSingular, 5);
        assert_eq!(error.kind(), ErrorKind::RootNotSingular);
        assert_eq!(error.position(), 5);
    }

    #[test]
    fn test_reached_end_conversion() {
        let error: ParseError = slice_input_buffer::Error::ReachedEnd(3).into();
        assert_eq!(error, ParseError::new(ErrorKind::ExpectedValue, 3));
    }

    #[test]
    fn test_display_and_debug() {
        let error = ParseError::new(ErrorKind::MissingClosingQuote, 4);
        assert_eq!(
            std::format!("{error}"),
            "missing closing quote at byte 4"
        );
        assert_eq!(std::format!("{error:?}"), "MissingClosingQuote at 4");
    }
}
