use std::fmt;

use crate::{GenerationError, Grammar, Rule, RuleId, Symbol};

/// LR(0) item
///
/// A rule paired with a dot position into its right-hand side. Equality and ordering are
/// structural: by rule first, then by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub rule_idx: RuleId,
    pub pos: usize,
}

impl Item {
    pub fn new(rule_idx: RuleId, pos: usize) -> Self {
        Self { rule_idx, pos }
    }

    /// Look up the item's rule, checking that the dot lies within it
    pub fn rule<'g, G: Grammar>(&self, grammar: &'g G) -> Result<&'g Rule, GenerationError> {
        let rule = grammar
            .rule(self.rule_idx)
            .ok_or(GenerationError::UnknownRule(self.rule_idx))?;
        if self.pos > rule.rhs.len() {
            return Err(GenerationError::DotOutOfBounds {
                rule_idx: self.rule_idx,
                pos: self.pos,
            });
        }
        Ok(rule)
    }

    /// Symbol right after the dot, if the dot is not at the end
    pub fn next_symbol<G: Grammar>(&self, grammar: &G) -> Result<Option<Symbol>, GenerationError> {
        let rule = self.rule(grammar)?;
        Ok(rule.rhs.get(self.pos).cloned())
    }

    pub fn is_pos_at_end<G: Grammar>(&self, grammar: &G) -> Result<bool, GenerationError> {
        Ok(self.pos == self.rule(grammar)?.rhs.len())
    }

    /// The same item with the dot moved one symbol to the right
    pub fn advance(&self) -> Self {
        Self {
            rule_idx: self.rule_idx,
            pos: self.pos + 1,
        }
    }

    pub fn augmented_rule_string<G: Grammar>(&self, grammar: &G) -> String {
        let rule = match grammar.rule(self.rule_idx) {
            Some(rule) => rule,
            None => return format!("<unknown rule {}>", self.rule_idx),
        };
        let mut result = format!("{} →", grammar.label(rule.lhs));
        for p in 0..=rule.rhs.len() {
            if p == self.pos {
                result.push_str(" •");
            }
            if p < rule.rhs.len() {
                result.push(' ');
                result.push_str(grammar.label(rule.rhs[p]));
            }
        }
        result
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.rule_idx, self.pos)
    }
}
