// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data at the given position.
    ReachedEnd(usize),
}

/// A cursor over the unconsumed part of the input.
///
/// The position only ever moves forward; everything before it has been consumed.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Next byte, or `ReachedEnd` if the input is exhausted.
    pub fn peek_or_end(&self) -> Result<u8, Error> {
        self.peek().ok_or(Error::ReachedEnd(self.pos))
    }

    /// Moves the cursor forward by `count` bytes, stopping at the end of input.
    pub fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Consumes `ch`, which the caller has already matched.
    pub fn consume_expected(&mut self, ch: u8) {
        debug_assert_eq!(
            self.peek(),
            Some(ch),
            "consume_expected called without a matching byte"
        );
        self.advance(1);
    }

    /// Skips space, tab, newline and carriage return.
    pub fn skip_whitespace(&mut self) {
        let count = self
            .remaining()
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
            .count();
        self.advance(count);
    }
}
