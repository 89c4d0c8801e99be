// SPDX-License-Identifier: Apache-2.0

//! Runtime parser configuration

/// Default limit on array/object nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What to do when an object repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The later value replaces the earlier one.
    #[default]
    LastWins,
    /// Fail with [`ErrorKind::DuplicateKey`](crate::ErrorKind::DuplicateKey).
    Reject,
}

/// Options controlling a [`TreeParser`](crate::TreeParser).
///
/// # Example
/// ```
/// use picotree::{DuplicateKeys, ParserConfig};
/// let config = ParserConfig {
///     max_depth: 16,
///     duplicate_keys: DuplicateKeys::Reject,
///     ..ParserConfig::default()
/// };
/// assert!(picotree::parse_with_config(r#"{"a": 1, "a": 2}"#, &config).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of arrays/objects open at once. Zero allows only scalar documents.
    pub max_depth: usize,
    /// Enforce the RFC 8259 number grammar.
    ///
    /// When disabled, leading zeros (`0123`) and a leading `+` are accepted.
    pub strict_numbers: bool,
    pub duplicate_keys: DuplicateKeys,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_numbers: true,
            duplicate_keys: DuplicateKeys::LastWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.strict_numbers);
        assert_eq!(config.duplicate_keys, DuplicateKeys::LastWins);
    }
}
