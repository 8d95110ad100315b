use std::collections::BTreeSet;

use crate::{Rule, RuleId, Symbol};

/// Read-only view of a context-free grammar
///
/// This is everything the table construction needs to know about a grammar. Implementations
/// hand out symbol ids `0..symbol_count()` and rule ids `0..rule_count()`. The grammar is never
/// mutated while a table is being built.
///
/// `ContextFreeGrammar` is the implementation shipped with this crate, but any type exposing
/// these queries can be used.
pub trait Grammar {
    /// Number of symbols, terminals and nonterminals alike
    fn symbol_count(&self) -> usize;

    fn is_terminal(&self, symbol: Symbol) -> bool;

    /// Display label for a symbol
    ///
    /// Only used for presentation and diagnostics.
    fn label(&self, symbol: Symbol) -> &str;

    fn rule_count(&self) -> usize;

    fn rule(&self, rule_idx: RuleId) -> Option<&Rule>;

    /// Rule id of the start rule, e.g. `S' -> S`
    fn start_rule(&self) -> RuleId;

    /// Left-hand side of the start rule
    ///
    /// Completing a rule for this symbol means accepting the input.
    fn start_symbol(&self) -> Symbol;

    /// End-of-input sentinel the accept action is keyed on
    fn end_symbol(&self) -> Symbol;

    /// FOLLOW set of a nonterminal
    fn follow(&self, symbol: Symbol) -> Option<&BTreeSet<Symbol>>;

    /// Ids of all rules with the given left-hand side, in ascending order
    fn rules_with_lhs(&self, lhs: Symbol) -> Vec<RuleId> {
        (0..self.rule_count())
            .filter(|&rule_idx| {
                self.rule(rule_idx)
                    .map_or(false, |rule| rule.lhs == lhs)
            })
            .collect()
    }

    /// All symbols in ascending id order
    fn symbols(&self) -> Vec<Symbol> {
        (0..self.symbol_count()).map(Symbol).collect()
    }

    fn terminals(&self) -> Vec<Symbol> {
        self.symbols()
            .into_iter()
            .filter(|&s| self.is_terminal(s))
            .collect()
    }

    fn nonterminals(&self) -> Vec<Symbol> {
        self.symbols()
            .into_iter()
            .filter(|&s| !self.is_terminal(s))
            .collect()
    }
}
