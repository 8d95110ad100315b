use crate::Symbol;

/// Rule index as assigned by the grammar
pub type RuleId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub lhs: Symbol,
    pub rhs: Vec<Symbol>,
}

impl Rule {
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Self { lhs, rhs }
    }

    /// Whether the right-hand side is empty
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }
}
