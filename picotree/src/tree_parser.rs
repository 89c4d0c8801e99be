// SPDX-License-Identifier: Apache-2.0

use crate::config::ParserConfig;
use crate::number_parser::parse_number;
use crate::parse_error::{ErrorKind, ParseError};
use crate::scalar_parser::{parse_literal, parse_string};
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// A recursive-descent parser that builds a [`Value`] tree from a slice.
///
/// Each parse routine returns a freshly built, owned `Value`; containers take
/// ownership of their children as they are returned.
// Lifetime 'a is the input buffer lifetime
pub struct TreeParser<'a> {
    pub(crate) input: SliceInputBuffer<'a>,
    pub(crate) config: ParserConfig,
    depth: usize,
}

impl<'a> TreeParser<'a> {
    /// Creates a new parser for the given JSON input with the default configuration.
    ///
    /// # Example
    /// ```
    /// use picotree::{JsonType, TreeParser};
    /// let value = TreeParser::new(r#"{"name": "value"}"#).parse().unwrap();
    /// assert_eq!(value.get_type(), JsonType::Object);
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// String content that is not valid UTF-8 is reported as `InvalidValue`.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_config_from_slice(input, ParserConfig::default())
    }

    /// Creates a new parser with a custom [`ParserConfig`].
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self::with_config_from_slice(input.as_bytes(), config)
    }

    /// Creates a new parser from a byte slice with a custom [`ParserConfig`].
    /// This is the core constructor that all other constructors delegate to.
    pub fn with_config_from_slice(input: &'a [u8], config: ParserConfig) -> Self {
        TreeParser {
            input: SliceInputBuffer::new(input),
            config,
            depth: 0,
        }
    }

    /// Parses the whole input as exactly one JSON value.
    ///
    /// Leading and trailing whitespace is allowed; anything else after the
    /// value fails with `RootNotSingular`.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        self.input.skip_whitespace();
        let value = self.parse_value()?;
        self.input.skip_whitespace();
        if !self.input.is_empty() {
            return ParseError::at(ErrorKind::RootNotSingular, self.input.current_pos());
        }
        Ok(value)
    }

    /// Parses one value, chosen by the next significant byte.
    pub(crate) fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.input.skip_whitespace();
        let next = self.input.peek_or_end()?;
        log::trace!("dispatch {:?} at {}", next as char, self.input.current_pos());

        match next {
            b'n' => parse_literal(&mut self.input, b"null").map(|()| Value::Null),
            b't' => parse_literal(&mut self.input, b"true").map(|()| Value::Bool(true)),
            b'f' => parse_literal(&mut self.input, b"false").map(|()| Value::Bool(false)),
            b'"' => parse_string(&mut self.input).map(Value::String),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            _ => parse_number(&mut self.input, self.config.strict_numbers).map(Value::Number),
        }
    }

    /// Tracks entry into an array or object, enforcing `max_depth`.
    pub(crate) fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth {
            return ParseError::at(ErrorKind::MaxDepthReached, self.input.current_pos());
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
