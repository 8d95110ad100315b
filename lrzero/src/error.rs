use std::ops::Range;

use thiserror::Error;

use crate::{StateId, Symbol};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No action for the current lookahead: the input is not in the language
    #[error("Parse error: did not expect {symbol} in state {state} at {range:?}")]
    Unexpected {
        symbol: Symbol,
        state: StateId,
        range: Range<usize>,
    },
    /// The table does not fit the grammar, e.g. a reduce without a matching goto
    #[error("Malformed parse table: no way to continue from state {state} on {symbol}")]
    MalformedTable { state: StateId, symbol: Symbol },
}
