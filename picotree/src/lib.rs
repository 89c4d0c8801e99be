// SPDX-License-Identifier: Apache-2.0

//! A small recursive-descent JSON parser that builds an owned [`Value`] tree.
//!
//! ```
//! use picotree::{parse, JsonType};
//!
//! let doc = parse(r#"["abc", [1, 2], 3]"#).unwrap();
//! assert_eq!(doc.get_type(), JsonType::Array);
//! assert_eq!(doc.get_index(2).unwrap().number_value(), 3.0);
//! ```
//!
//! String content is copied verbatim: escape sequences such as `\n` or
//! `\u00e9` are kept as written and not decoded.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod composite_parser;

mod config;
pub use config::{DuplicateKeys, ParserConfig, DEFAULT_MAX_DEPTH};

mod number_parser;

mod parse_error;
pub use parse_error::{ErrorKind, ParseError};

mod scalar_parser;

mod slice_input_buffer;

mod tree_parser;
pub use tree_parser::TreeParser;

mod value;
pub use value::{JsonType, Map, Value};

/// Parses `input` as a single JSON document with the default configuration.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    TreeParser::new(input).parse()
}

/// Parses `input` as a single JSON document with a custom configuration.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> Result<Value, ParseError> {
    TreeParser::with_config(input, config.clone()).parse()
}

/// Parses `input` into an existing node.
///
/// The node is reset to [`Value::Null`] before parsing and only receives the
/// parsed tree on success, so it is never left half-built.
///
/// # Example
/// ```
/// use picotree::{parse_into, ErrorKind, JsonType, Value};
/// let mut node = Value::Bool(false);
/// let err = parse_into(&mut node, "null x").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::RootNotSingular);
/// assert_eq!(node.get_type(), JsonType::Null);
/// ```
pub fn parse_into(node: &mut Value, input: &str) -> Result<(), ParseError> {
    *node = Value::Null;
    *node = parse(input)?;
    Ok(())
}
