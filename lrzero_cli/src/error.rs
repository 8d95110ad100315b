use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Grammar is not LR(0), found {0} conflict(s)")]
    NotLr0(usize),
    #[error("`{0}` is not a terminal of the grammar")]
    UnknownTerminal(String),
    #[error("Input rejected in state {state}: unexpected `{symbol}` at token {position}")]
    Rejected {
        state: usize,
        symbol: String,
        position: usize,
    },
    #[error("Parse table is malformed at state {state} on `{symbol}`")]
    MalformedTable { state: usize, symbol: String },
}
