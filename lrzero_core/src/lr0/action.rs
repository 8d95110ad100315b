use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;

use crate::{Conflict, RuleId, StateId, Symbol};

/// Parse table action
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Consume a terminal and move to the given state
    Shift(StateId),
    /// Move to the given state after reducing to a nonterminal
    Goto(StateId),
    /// Reduce by the given rule
    Reduce(RuleId),
    Accept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    Shift,
    Goto,
    Reduce,
    Accept,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Shift(_) => ActionKind::Shift,
            Action::Goto(_) => ActionKind::Goto,
            Action::Reduce(_) => ActionKind::Reduce,
            Action::Accept => ActionKind::Accept,
        }
    }

    /// State id for shift and goto, rule id for reduce, zero for accept
    pub fn target(&self) -> usize {
        match self {
            Action::Shift(idx) | Action::Goto(idx) | Action::Reduce(idx) => *idx,
            Action::Accept => 0,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Action::Shift(idx) => write!(f, "s{}", idx),
            Action::Goto(idx) => write!(f, "g{}", idx),
            Action::Reduce(rule_idx) => write!(f, "r{}", rule_idx),
            Action::Accept => write!(f, "acc"),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let name = match self {
            ActionKind::Shift => "shift",
            ActionKind::Goto => "goto",
            ActionKind::Reduce => "reduce",
            ActionKind::Accept => "accept",
        };
        write!(f, "{}", name)
    }
}

/// Actions of all states, keyed by symbol
///
/// A missing entry means there is no action for that state and symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTable {
    rows: Vec<BTreeMap<Symbol, Action>>,
}

impl ActionTable {
    pub fn with_states(state_count: usize) -> Self {
        Self {
            rows: vec![BTreeMap::new(); state_count],
        }
    }

    /// Install an action unless a different one is already present
    ///
    /// Setting the same action twice is fine. If a different action exists, it is kept and the
    /// clash is returned as a `Conflict`.
    pub fn set_action(
        &mut self,
        state: StateId,
        symbol: Symbol,
        action: Action,
    ) -> Result<(), Conflict> {
        if state >= self.rows.len() {
            self.rows.resize_with(state + 1, BTreeMap::new);
        }
        match self.rows[state].entry(symbol) {
            Entry::Vacant(entry) => {
                entry.insert(action);
                Ok(())
            }
            Entry::Occupied(entry) => {
                if *entry.get() == action {
                    Ok(())
                } else {
                    Err(Conflict {
                        state,
                        symbol,
                        existing: *entry.get(),
                        rejected: action,
                    })
                }
            }
        }
    }

    pub fn get(&self, state: StateId, symbol: Symbol) -> Option<Action> {
        self.rows
            .get(state)
            .and_then(|row| row.get(&symbol))
            .cloned()
    }

    /// All actions of a state in ascending symbol order
    pub fn row(&self, state: StateId) -> Option<&BTreeMap<Symbol, Action>> {
        self.rows.get(state)
    }

    pub fn rows(&self) -> impl Iterator<Item = (StateId, btree_map::Iter<'_, Symbol, Action>)> {
        self.rows.iter().map(BTreeMap::iter).enumerate()
    }

    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.rows.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use matches::assert_matches;

    #[test]
    fn test_set_action_first_wins() {
        let mut table = ActionTable::with_states(2);
        let a = Symbol(1);

        assert!(table.set_action(0, a, Action::Shift(1)).is_ok());
        // Identical actions are idempotent
        assert!(table.set_action(0, a, Action::Shift(1)).is_ok());

        let conflict = table.set_action(0, a, Action::Reduce(3)).unwrap_err();
        assert_eq!(conflict.state, 0);
        assert_eq!(conflict.symbol, a);
        assert_matches!(conflict.existing, Action::Shift(1));
        assert_matches!(conflict.rejected, Action::Reduce(3));

        assert_eq!(table.get(0, a), Some(Action::Shift(1)));
        assert_eq!(table.get(1, a), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_action_target() {
        assert_eq!(Action::Shift(4).target(), 4);
        assert_eq!(Action::Goto(2).target(), 2);
        assert_eq!(Action::Reduce(7).target(), 7);
        assert_eq!(Action::Accept.target(), 0);
        assert_eq!(Action::Reduce(7).kind(), ActionKind::Reduce);
        assert_eq!(format!("{}", Action::Goto(2)), "g2");
    }
}
