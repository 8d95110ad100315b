use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::{closure, successor, GenerationError, Grammar, Item, State, StateId};

/// Canonical collection of LR(0) item sets
///
/// States are numbered in order of discovery. Discovery is breadth-first and tries the symbols
/// of each state in ascending id order, so a given grammar always yields the same numbering.
#[derive(Debug, Clone, Default)]
pub struct CanonicalCollection {
    states: Vec<State>,
    ids: HashMap<State, StateId>,
}

impl CanonicalCollection {
    /// Discover all states reachable from the closure of the start item
    pub fn build<G: Grammar>(grammar: &G) -> Result<Self, GenerationError> {
        let mut collection = Self::default();

        let start_state = closure(grammar, vec![Item::new(grammar.start_rule(), 0)])?;
        let (start_idx, _) = collection.insert(start_state);

        let mut next_states = VecDeque::<StateId>::new();
        next_states.push_back(start_idx);

        let symbols = grammar.symbols();
        while let Some(current_state) = next_states.pop_front() {
            for &symbol in symbols.iter() {
                let next_state = successor(grammar, &collection.states[current_state], symbol)?;
                if next_state.is_empty() {
                    continue;
                }
                let (idx, is_new) = collection.insert(next_state);
                if is_new {
                    trace!(
                        "state {} discovered from state {} on `{}`",
                        idx,
                        current_state,
                        grammar.label(symbol)
                    );
                    next_states.push_back(idx);
                }
            }
        }

        debug!("canonical collection has {} states", collection.len());
        Ok(collection)
    }

    /// Add a state unless an equal one exists; returns its id and whether it was added
    fn insert(&mut self, state: State) -> (StateId, bool) {
        if let Some(idx) = self.ids.get(&state) {
            return (*idx, false);
        }
        let idx = self.states.len();
        self.ids.insert(state.clone(), idx);
        self.states.push(state);
        (idx, true)
    }

    /// Id of a state structurally equal to `state`
    pub fn state_id(&self, state: &State) -> Option<StateId> {
        self.ids.get(state).cloned()
    }

    pub fn state(&self, idx: StateId) -> Option<&State> {
        self.states.get(idx)
    }

    /// All states, indexed by their id
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
