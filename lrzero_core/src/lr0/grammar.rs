use std::collections::{BTreeSet, HashMap};

use crate::{Grammar, GrammarError, Rule, RuleId, Symbol};

/// Label of the end-of-input sentinel
pub const END_LABEL: &str = "$end";

/// Rule id of the augmented start rule `S' → S`
pub const AUGMENTED_RULE: RuleId = 0;

/// Incrementally assembles a `ContextFreeGrammar`
///
/// Symbols get ids in registration order, starting with the end-of-input sentinel at id 0.
/// Rules get ids starting at 1, since rule 0 is reserved for the augmented start rule added by
/// `build`.
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    labels: Vec<String>,
    by_label: HashMap<String, Symbol>,
    rules: Vec<Rule>,
    start: Option<Symbol>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            labels: Vec::new(),
            by_label: HashMap::new(),
            rules: Vec::new(),
            start: None,
        };
        builder.add_token(END_LABEL);
        builder
    }

    /// Register a symbol, or return the id it already has
    pub fn add_token(&mut self, label: &str) -> Symbol {
        if let Some(symbol) = self.by_label.get(label) {
            return *symbol;
        }
        let symbol = Symbol(self.labels.len());
        self.labels.push(label.to_owned());
        self.by_label.insert(label.to_owned(), symbol);
        symbol
    }

    pub fn symbol(&self, label: &str) -> Option<Symbol> {
        self.by_label.get(label).cloned()
    }

    pub fn end_symbol(&self) -> Symbol {
        Symbol(0)
    }

    /// Add the rule `lhs → rhs` and return its rule id
    pub fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) -> Result<RuleId, GrammarError> {
        for &symbol in Some(&lhs).into_iter().chain(rhs.iter()) {
            if symbol.id() >= self.labels.len() {
                return Err(GrammarError::UnknownSymbol(symbol));
            }
            if symbol == self.end_symbol() {
                return Err(GrammarError::EndSymbolInRule);
            }
        }
        self.rules.push(Rule::new(lhs, rhs.to_vec()));
        Ok(self.rules.len())
    }

    pub fn set_start(&mut self, start: Symbol) -> Result<(), GrammarError> {
        if start.id() >= self.labels.len() {
            return Err(GrammarError::UnknownSymbol(start));
        }
        self.start = Some(start);
        Ok(())
    }

    /// Augment the grammar and compute its FIRST and FOLLOW sets
    pub fn build(self) -> Result<ContextFreeGrammar, GrammarError> {
        let user_start = self.start.ok_or(GrammarError::MissingStart)?;
        if !self.rules.iter().any(|rule| rule.lhs == user_start) {
            return Err(GrammarError::MissingStartRule(
                self.labels[user_start.id()].clone(),
            ));
        }

        let mut labels = self.labels;
        let mut start_label = format!("{}'", labels[user_start.id()]);
        while self.by_label.contains_key(&start_label) {
            start_label.push('\'');
        }
        let start = Symbol(labels.len());
        labels.push(start_label);

        let mut rules = Vec::with_capacity(self.rules.len() + 1);
        rules.push(Rule::new(start, vec![user_start]));
        rules.extend(self.rules);

        let mut rules_by_lhs = vec![Vec::new(); labels.len()];
        for (rule_idx, rule) in rules.iter().enumerate() {
            rules_by_lhs[rule.lhs.id()].push(rule_idx);
        }
        let terminal = rules_by_lhs.iter().map(Vec::is_empty).collect();

        let mut grammar = ContextFreeGrammar {
            labels,
            terminal,
            rules,
            rules_by_lhs,
            start,
            user_start,
            end: Symbol(0),
            nullable: Vec::new(),
            first_sets: Vec::new(),
            follow_sets: Vec::new(),
        };
        grammar.compute_first_sets();
        grammar.compute_follow_sets();
        Ok(grammar)
    }
}

/// Augmented context-free grammar with precomputed FIRST and FOLLOW sets
#[derive(Debug, Clone)]
pub struct ContextFreeGrammar {
    labels: Vec<String>,
    terminal: Vec<bool>,
    rules: Vec<Rule>,
    rules_by_lhs: Vec<Vec<RuleId>>,
    start: Symbol,
    user_start: Symbol,
    end: Symbol,
    nullable: Vec<bool>,
    first_sets: Vec<BTreeSet<Symbol>>,
    follow_sets: Vec<BTreeSet<Symbol>>,
}

impl ContextFreeGrammar {
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn symbol(&self, label: &str) -> Option<Symbol> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(Symbol)
    }

    /// The start symbol as declared, before augmentation
    pub fn user_start_symbol(&self) -> Symbol {
        self.user_start
    }

    pub fn is_nullable(&self, symbol: Symbol) -> bool {
        self.nullable.get(symbol.id()).cloned().unwrap_or(false)
    }

    /// FIRST set of a symbol
    ///
    /// Contains every terminal that can start a derivation of `symbol`. The FIRST set of a
    /// terminal `t` is `{t}`.
    pub fn first(&self, symbol: Symbol) -> Option<&BTreeSet<Symbol>> {
        self.first_sets.get(symbol.id())
    }

    /// Nullable, FIRST sets
    ///
    /// Fixpoint iteration over all rules until no set grows anymore. Unlike a recursive
    /// definition this also copes with left recursion and ε-rules.
    fn compute_first_sets(&mut self) {
        let symbol_count = self.labels.len();
        self.nullable = vec![false; symbol_count];
        self.first_sets = vec![BTreeSet::new(); symbol_count];
        for (id, is_terminal) in self.terminal.iter().enumerate() {
            if *is_terminal {
                self.first_sets[id].insert(Symbol(id));
            }
        }

        let mut changed = true;
        while changed {
            changed = false;
            for rule in self.rules.iter() {
                let lhs = rule.lhs.id();
                let mut all_nullable = true;
                for symbol in rule.rhs.iter() {
                    let first = self.first_sets[symbol.id()].clone();
                    for t in first {
                        changed |= self.first_sets[lhs].insert(t);
                    }
                    if !self.nullable[symbol.id()] {
                        all_nullable = false;
                        break;
                    }
                }
                if all_nullable && !self.nullable[lhs] {
                    self.nullable[lhs] = true;
                    changed = true;
                }
            }
        }
    }

    /// FOLLOW sets
    ///
    /// For every `A → α B β`, FIRST(β) goes into FOLLOW(B), and if β is nullable so does
    /// FOLLOW(A). The augmented start symbol is followed by the end of input.
    fn compute_follow_sets(&mut self) {
        let symbol_count = self.labels.len();
        self.follow_sets = vec![BTreeSet::new(); symbol_count];
        self.follow_sets[self.start.id()].insert(self.end);

        let mut changed = true;
        while changed {
            changed = false;
            for rule in self.rules.iter() {
                let lhs = rule.lhs.id();
                for (i, symbol) in rule.rhs.iter().enumerate() {
                    if self.terminal[symbol.id()] {
                        continue;
                    }
                    let mut beta_nullable = true;
                    for next in rule.rhs[i + 1..].iter() {
                        let first = self.first_sets[next.id()].clone();
                        for t in first {
                            changed |= self.follow_sets[symbol.id()].insert(t);
                        }
                        if !self.nullable[next.id()] {
                            beta_nullable = false;
                            break;
                        }
                    }
                    if beta_nullable {
                        let follow_lhs = self.follow_sets[lhs].clone();
                        for t in follow_lhs {
                            changed |= self.follow_sets[symbol.id()].insert(t);
                        }
                    }
                }
            }
        }
    }
}

impl Grammar for ContextFreeGrammar {
    fn symbol_count(&self) -> usize {
        self.labels.len()
    }

    fn is_terminal(&self, symbol: Symbol) -> bool {
        self.terminal.get(symbol.id()).cloned().unwrap_or(false)
    }

    fn label(&self, symbol: Symbol) -> &str {
        self.labels
            .get(symbol.id())
            .map_or("<unknown>", String::as_str)
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn rule(&self, rule_idx: RuleId) -> Option<&Rule> {
        self.rules.get(rule_idx)
    }

    fn start_rule(&self) -> RuleId {
        AUGMENTED_RULE
    }

    fn start_symbol(&self) -> Symbol {
        self.start
    }

    fn end_symbol(&self) -> Symbol {
        self.end
    }

    fn follow(&self, symbol: Symbol) -> Option<&BTreeSet<Symbol>> {
        self.follow_sets.get(symbol.id())
    }

    fn rules_with_lhs(&self, lhs: Symbol) -> Vec<RuleId> {
        self.rules_by_lhs
            .get(lhs.id())
            .cloned()
            .unwrap_or_default()
    }
}
