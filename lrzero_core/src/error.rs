use thiserror::Error;

use crate::{RuleId, StateId, Symbol};

/// Fatal error during table generation
///
/// These only occur when the grammar handed to the generator is inconsistent, e.g. a rule
/// refers to a symbol the grammar does not know about. Conflicts are not errors, see
/// `ParseTable::conflicts`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Rule {0} is not defined by the grammar")]
    UnknownRule(RuleId),
    #[error("Symbol {0} is not defined by the grammar")]
    UnknownSymbol(Symbol),
    #[error("Item ({rule_idx}, {pos}) places the dot past the end of its rule")]
    DotOutOfBounds { rule_idx: RuleId, pos: usize },
    #[error("Successor of state {from} on {symbol} is missing from the canonical collection")]
    MissingState { from: StateId, symbol: Symbol },
}

/// Error while assembling a `ContextFreeGrammar`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("Missing start symbol")]
    MissingStart,
    #[error("Missing start rule: no rule has `{0}` as its left-hand side")]
    MissingStartRule(String),
    #[error("Symbol {0} has not been registered")]
    UnknownSymbol(Symbol),
    #[error("The end-of-input symbol cannot be used in a rule")]
    EndSymbolInRule,
}
