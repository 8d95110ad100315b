use std::collections::HashSet;

use lrzero_core::START_STATE;

use crate::{Action, Grammar, Lexer, ParseError, ParseTable, RuleId, StateId};

/// Table-driven shift-reduce recognizer
///
/// Drives a `ParseTable` over the terminals produced by a `Lexer`. The recognizer only decides
/// membership; on success it reports the rules it reduced by, in order, which is the rightmost
/// derivation of the input read backwards.
pub struct Recognizer<'t, G: Grammar> {
    grammar: &'t G,
    table: &'t ParseTable,
}

impl<'t, G: Grammar> Recognizer<'t, G> {
    pub fn new(grammar: &'t G, table: &'t ParseTable) -> Self {
        Self { grammar, table }
    }

    pub fn recognize<L: Lexer>(&self, lexer: &mut L) -> Result<Vec<RuleId>, ParseError> {
        let mut stack: Vec<StateId> = vec![START_STATE];
        let mut reductions = Vec::new();
        let mut guard = CycleGuard::new(self.table.states().len(), stack.len());

        loop {
            crate::lrzero_trace!("stack = {:?}", stack);

            let state = top(&stack, &*lexer)?;
            let symbol = lexer.symbol();
            match self.table.action(state, symbol) {
                Some(Action::Shift(idx)) => {
                    crate::lrzero_trace!("shift {}", idx);
                    stack.push(idx);
                    lexer.advance();
                    guard.reset(stack.len());
                }
                Some(Action::Reduce(rule_idx)) => {
                    crate::lrzero_trace!("reduce {}", rule_idx);

                    let rule = self
                        .grammar
                        .rule(rule_idx)
                        .ok_or(ParseError::MalformedTable { state, symbol })?;
                    let to_be_popped = rule.rhs.len();
                    if to_be_popped >= stack.len() {
                        return Err(ParseError::MalformedTable { state, symbol });
                    }
                    stack.truncate(stack.len() - to_be_popped);
                    guard.lower(stack.len());

                    let exposed = top(&stack, &*lexer)?;
                    match self.table.action(exposed, rule.lhs) {
                        Some(Action::Goto(idx)) => stack.push(idx),
                        _ => {
                            return Err(ParseError::MalformedTable {
                                state: exposed,
                                symbol: rule.lhs,
                            })
                        }
                    }
                    reductions.push(rule_idx);

                    if guard.is_stuck(&stack) {
                        return Err(ParseError::MalformedTable { state, symbol });
                    }
                }
                Some(Action::Accept) => {
                    crate::lrzero_trace!("accept");
                    return Ok(reductions);
                }
                Some(Action::Goto(_)) | None => {
                    return Err(ParseError::Unexpected {
                        symbol,
                        state,
                        range: lexer.range(),
                    });
                }
            }
        }
    }
}

/// Detects reductions that can never reach the next shift
///
/// Between two shifts the stack below its lowest point stays untouched, so the run only
/// depends on the segment above it and the unchanged lookahead. A segment seen twice means a
/// cycle. A segment longer than the number of states repeats a state and keeps growing.
struct CycleGuard {
    state_count: usize,
    floor: usize,
    seen: HashSet<Vec<StateId>>,
}

impl CycleGuard {
    fn new(state_count: usize, depth: usize) -> Self {
        Self {
            state_count,
            floor: depth,
            seen: HashSet::new(),
        }
    }

    /// Called after every shift
    fn reset(&mut self, depth: usize) {
        self.floor = depth;
        self.seen.clear();
    }

    /// Called with the stack depth right after popping a right-hand side
    fn lower(&mut self, depth: usize) {
        if depth < self.floor {
            self.floor = depth;
            self.seen.clear();
        }
    }

    fn is_stuck(&mut self, stack: &[StateId]) -> bool {
        let segment = &stack[self.floor.min(stack.len())..];
        segment.len() > self.state_count || !self.seen.insert(segment.to_vec())
    }
}

fn top<L: Lexer>(stack: &[StateId], lexer: &L) -> Result<StateId, ParseError> {
    stack
        .last()
        .cloned()
        .ok_or_else(|| ParseError::MalformedTable {
            state: START_STATE,
            symbol: lexer.symbol(),
        })
}
