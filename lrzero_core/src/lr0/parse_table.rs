use log::{debug, warn};

use crate::{
    successor, Action, ActionTable, CanonicalCollection, Conflict, GenerationError, Grammar,
    State, StateId, Symbol,
};

/// LR(0) parse table
///
/// Holds the canonical collection, the action table derived from it and every conflict that
/// came up while filling the table. Construction is best-effort: when two actions compete for
/// the same entry, the first one stays and the clash is recorded. A table with conflicts does
/// not describe a deterministic parser; check `is_lr0` before using it.
#[derive(Debug, Clone)]
pub struct ParseTable {
    pub collection: CanonicalCollection,
    pub actions: ActionTable,
    pub conflicts: Vec<Conflict>,
}

impl ParseTable {
    /// Generate the LR(0) parse table of a grammar
    pub fn generate<G: Grammar>(grammar: &G) -> Result<Self, GenerationError> {
        ParseTableGenerator::from_grammar(grammar)?.generate()
    }

    pub fn action(&self, state: StateId, symbol: Symbol) -> Option<Action> {
        self.actions.get(state, symbol)
    }

    pub fn state_id(&self, state: &State) -> Option<StateId> {
        self.collection.state_id(state)
    }

    pub fn states(&self) -> &[State] {
        self.collection.states()
    }

    /// Whether the table is conflict-free
    pub fn is_lr0(&self) -> bool {
        self.conflicts.is_empty()
    }
}

struct ParseTableGenerator<'g, G: Grammar> {
    grammar: &'g G,
    collection: CanonicalCollection,
    actions: ActionTable,
    conflicts: Vec<Conflict>,
    terminals: Vec<Symbol>,
    nonterminals: Vec<Symbol>,
}

impl<'g, G: Grammar> ParseTableGenerator<'g, G> {
    fn from_grammar(grammar: &'g G) -> Result<Self, GenerationError> {
        let collection = CanonicalCollection::build(grammar)?;
        let actions = ActionTable::with_states(collection.len());
        Ok(Self {
            grammar,
            collection,
            actions,
            conflicts: Vec::new(),
            terminals: grammar.terminals(),
            nonterminals: grammar.nonterminals(),
        })
    }

    fn generate(mut self) -> Result<ParseTable, GenerationError> {
        for current_state in 0..self.collection.len() {
            self.add_shift_actions(current_state)?;
            self.add_goto_actions(current_state)?;
            self.add_reduce_actions(current_state)?;
        }

        debug!(
            "parse table has {} states, {} actions and {} conflicts",
            self.collection.len(),
            self.actions.len(),
            self.conflicts.len()
        );

        Ok(ParseTable {
            collection: self.collection,
            actions: self.actions,
            conflicts: self.conflicts,
        })
    }

    /// Shift actions for terminals right after a dot
    fn add_shift_actions(&mut self, current_state: StateId) -> Result<(), GenerationError> {
        for idx in 0..self.terminals.len() {
            let terminal = self.terminals[idx];
            let mut expected = false;
            for item in self.collection.states()[current_state].iter() {
                if item.next_symbol(self.grammar)? == Some(terminal) {
                    expected = true;
                    break;
                }
            }
            if expected {
                let next_idx = self.transition(current_state, terminal)?;
                self.set_action(current_state, terminal, Action::Shift(next_idx));
            }
        }
        Ok(())
    }

    /// Goto actions for nonterminals right after a dot
    fn add_goto_actions(&mut self, current_state: StateId) -> Result<(), GenerationError> {
        for idx in 0..self.nonterminals.len() {
            let nonterminal = self.nonterminals[idx];
            let next_state = successor(
                self.grammar,
                &self.collection.states()[current_state],
                nonterminal,
            )?;
            if next_state.is_empty() {
                continue;
            }
            let next_idx = self.lookup(current_state, nonterminal, &next_state)?;
            self.set_action(current_state, nonterminal, Action::Goto(next_idx));
        }
        Ok(())
    }

    /// Reduce and accept actions for items with the dot at the end
    ///
    /// Completing a rule of the start symbol accepts on end of input. Any other completed rule
    /// reduces on every terminal in the FOLLOW set of its left-hand side.
    fn add_reduce_actions(&mut self, current_state: StateId) -> Result<(), GenerationError> {
        let mut completed = Vec::new();
        for item in self.collection.states()[current_state].iter() {
            if item.is_pos_at_end(self.grammar)? {
                completed.push(*item);
            }
        }

        for item in completed {
            let lhs = item.rule(self.grammar)?.lhs;
            if lhs == self.grammar.start_symbol() {
                let end = self.grammar.end_symbol();
                self.set_action(current_state, end, Action::Accept);
            } else {
                let follow: Vec<Symbol> = match self.grammar.follow(lhs) {
                    Some(follow) => follow.iter().cloned().collect(),
                    None => return Err(GenerationError::UnknownSymbol(lhs)),
                };
                for terminal in follow {
                    self.set_action(current_state, terminal, Action::Reduce(item.rule_idx));
                }
            }
        }
        Ok(())
    }

    fn transition(&self, from: StateId, symbol: Symbol) -> Result<StateId, GenerationError> {
        let next_state = successor(self.grammar, &self.collection.states()[from], symbol)?;
        self.lookup(from, symbol, &next_state)
    }

    /// Every successor was discovered while building the collection
    fn lookup(
        &self,
        from: StateId,
        symbol: Symbol,
        next_state: &State,
    ) -> Result<StateId, GenerationError> {
        self.collection
            .state_id(next_state)
            .ok_or(GenerationError::MissingState { from, symbol })
    }

    fn set_action(&mut self, state: StateId, symbol: Symbol, action: Action) {
        if let Err(conflict) = self.actions.set_action(state, symbol, action) {
            warn!("not LR(0): {}", conflict.describe(self.grammar));
            self.conflicts.push(conflict);
        }
    }
}
