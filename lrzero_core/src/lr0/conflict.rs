use std::fmt;

use crate::{Action, Grammar, StateId, Symbol};

/// Two different actions demanded for the same state and symbol
///
/// The action that was installed first stays in the table; the other one is recorded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Conflict {
    pub state: StateId,
    pub symbol: Symbol,
    pub existing: Action,
    pub rejected: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    ShiftReduce,
    ReduceReduce,
    /// Any other combination, e.g. two shifts to different states
    Other,
}

impl Conflict {
    pub fn kind(&self) -> ConflictKind {
        match (self.existing, self.rejected) {
            (Action::Shift(_), Action::Reduce(_)) | (Action::Reduce(_), Action::Shift(_)) => {
                ConflictKind::ShiftReduce
            }
            (Action::Reduce(_), Action::Reduce(_)) => ConflictKind::ReduceReduce,
            _ => ConflictKind::Other,
        }
    }

    /// Describe the conflict using the grammar's symbol labels
    pub fn describe<G: Grammar>(&self, grammar: &G) -> String {
        let label = if self.symbol.id() < grammar.symbol_count() {
            grammar.label(self.symbol).to_owned()
        } else {
            format!("{}", self.symbol)
        };
        format!(
            "{} conflict in state {} on `{}`: keeping {}, rejecting {}",
            self.kind(),
            self.state,
            label,
            self.existing,
            self.rejected
        )
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ConflictKind::ShiftReduce => write!(f, "Shift-reduce"),
            ConflictKind::ReduceReduce => write!(f, "Reduce-reduce"),
            ConflictKind::Other => write!(f, "Action"),
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} conflict in state {} on {}: keeping {}, rejecting {}",
            self.kind(),
            self.state,
            self.symbol,
            self.existing,
            self.rejected
        )
    }
}
