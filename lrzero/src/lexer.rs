use std::ops::Range;

use crate::{Lexer, Symbol};

/// Lexer over a slice of already classified terminals
pub struct SliceLexer<'source> {
    input: &'source [Symbol],
    end: Symbol,
    pos: usize,
}

impl<'source> SliceLexer<'source> {
    /// `end` is reported once the input is exhausted
    pub fn new(input: &'source [Symbol], end: Symbol) -> Self {
        Self { input, end, pos: 0 }
    }
}

impl<'source> Lexer for SliceLexer<'source> {
    fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    fn symbol(&self) -> Symbol {
        self.input.get(self.pos).cloned().unwrap_or(self.end)
    }

    #[allow(clippy::range_plus_one)]
    fn range(&self) -> Range<usize> {
        if self.pos < self.input.len() {
            Range {
                start: self.pos,
                end: self.pos + 1,
            }
        } else {
            Range {
                start: self.pos,
                end: self.pos,
            }
        }
    }
}
