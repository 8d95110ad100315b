use std::ops::Range;

use crate::Symbol;

/// A generic lexer trait
///
/// This trait should be implemented for lexers that feed a `Recognizer`. The lexer is
/// positioned on the current terminal; once the input is exhausted it has to keep reporting the
/// grammar's end symbol.
pub trait Lexer {
    fn advance(&mut self);
    fn symbol(&self) -> Symbol;
    fn range(&self) -> Range<usize>;
}
