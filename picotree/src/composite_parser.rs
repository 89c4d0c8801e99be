// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::DuplicateKeys;
use crate::parse_error::{ErrorKind, ParseError};
use crate::scalar_parser::parse_string;
use crate::tree_parser::TreeParser;
use crate::value::{Map, Value};

impl TreeParser<'_> {
    /// Consumes `b` if it is the next byte.
    fn eat(&mut self, b: u8) -> bool {
        if self.input.peek() == Some(b) {
            self.input.consume_expected(b);
            true
        } else {
            false
        }
    }

    /// Parses `[ value, ... ]`, the opening bracket being the next byte.
    pub(crate) fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.input.consume_expected(b'[');
        self.input.skip_whitespace();

        let mut items = Vec::new();
        if !self.eat(b']') {
            loop {
                items.push(self.parse_value()?);
                self.input.skip_whitespace();
                if self.eat(b',') {
                    continue;
                }
                if self.eat(b']') {
                    break;
                }
                return ParseError::at(ErrorKind::InvalidValue, self.input.current_pos());
            }
        }

        self.exit_container();
        Ok(Value::Array(items))
    }

    /// Parses `{ "key": value, ... }`, the opening brace being the next byte.
    pub(crate) fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.input.consume_expected(b'{');
        self.input.skip_whitespace();

        let mut fields = Map::new();
        if !self.eat(b'}') {
            loop {
                self.input.skip_whitespace();
                let key_pos = self.input.current_pos();
                if self.input.peek_or_end()? != b'"' {
                    return ParseError::at(ErrorKind::InvalidValue, key_pos);
                }
                let key = parse_string(&mut self.input)?;

                self.input.skip_whitespace();
                if !self.eat(b':') {
                    return ParseError::at(ErrorKind::InvalidValue, self.input.current_pos());
                }
                let value = self.parse_value()?;
                self.insert_field(&mut fields, key, value, key_pos)?;

                self.input.skip_whitespace();
                if self.eat(b',') {
                    continue;
                }
                if self.eat(b'}') {
                    break;
                }
                return ParseError::at(ErrorKind::InvalidValue, self.input.current_pos());
            }
        }

        self.exit_container();
        Ok(Value::Object(fields))
    }

    fn insert_field(
        &self,
        fields: &mut Map,
        key: String,
        value: Value,
        key_pos: usize,
    ) -> Result<(), ParseError> {
        match self.config.duplicate_keys {
            DuplicateKeys::Reject if fields.contains_key(&key) => {
                ParseError::at(ErrorKind::DuplicateKey, key_pos)
            }
            _ => {
                if fields.insert(key, value).is_some() {
                    log::debug!("duplicate key at {key_pos} replaced earlier value");
                }
                Ok(())
            }
        }
    }
}
