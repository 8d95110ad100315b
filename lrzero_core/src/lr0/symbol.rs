use std::fmt;

/// Grammar symbol identifier
///
/// Symbols are plain ids handed out by the grammar. Whether a symbol is a terminal or a
/// nonterminal is a property of the grammar, not of the id. Ordering follows the id, which is
/// the order the canonical collection visits symbols in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(pub usize);

impl Symbol {
    pub fn id(self) -> usize {
        self.0
    }
}

impl From<usize> for Symbol {
    fn from(id: usize) -> Self {
        Symbol(id)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "#{}", self.0)
    }
}
