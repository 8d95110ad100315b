use std::collections::HashSet;

use crate::{GenerationError, Grammar, Item, State, Symbol};

/// Compute the closure of an item set
///
/// The closure contains every seed item and, for each item with the dot in front of a symbol
/// `X`, the items `X → • γ` for all rules of `X`. Terminals never appear as a left-hand side, so
/// expanding them yields nothing and no terminal check is needed.
///
/// Expansion works in rounds: every round only looks at the items added by the previous one and
/// stops once a round adds nothing. The result is sorted, which makes it a canonical `State`.
pub fn closure<G, I>(grammar: &G, seed: I) -> Result<State, GenerationError>
where
    G: Grammar,
    I: IntoIterator<Item = Item>,
{
    let mut closure: Vec<Item> = Vec::new();
    let mut seen: HashSet<Item> = HashSet::new();
    for item in seed {
        // Validates the rule id and dot position
        item.rule(grammar)?;
        if seen.insert(item) {
            closure.push(item);
        }
    }

    let mut frontier = closure.clone();
    while !frontier.is_empty() {
        let mut added = Vec::new();
        for item in frontier.iter() {
            let head = match item.next_symbol(grammar)? {
                Some(head) => head,
                None => continue,
            };
            check_symbol(grammar, head)?;
            for rule_idx in grammar.rules_with_lhs(head) {
                let new_item = Item::new(rule_idx, 0);
                if seen.insert(new_item) {
                    added.push(new_item);
                }
            }
        }
        closure.extend(added.iter().cloned());
        frontier = added;
    }

    Ok(State::from_items(closure))
}

/// Compute the state reached from `state` by moving over `symbol`
///
/// Advances the dot of every item expecting `symbol` and closes the result. An empty state
/// means there is no transition on `symbol`; that is a regular outcome, not an error.
pub fn successor<G: Grammar>(
    grammar: &G,
    state: &State,
    symbol: Symbol,
) -> Result<State, GenerationError> {
    let mut kernel = Vec::new();
    for item in state.iter() {
        if item.next_symbol(grammar)? == Some(symbol) {
            kernel.push(item.advance());
        }
    }
    if kernel.is_empty() {
        return Ok(State::new());
    }
    closure(grammar, kernel)
}

fn check_symbol<G: Grammar>(grammar: &G, symbol: Symbol) -> Result<(), GenerationError> {
    if symbol.id() < grammar.symbol_count() {
        Ok(())
    } else {
        Err(GenerationError::UnknownSymbol(symbol))
    }
}
