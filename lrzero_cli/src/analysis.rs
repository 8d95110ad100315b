use std::collections::BTreeSet;
use std::error::Error;

use prettytable as pt;
use prettytable::cell;
use prettytable::row;

use lrzero::{ContextFreeGrammar, Grammar, Symbol};

use crate::grammar_file;

pub fn print_grammar(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let grammar = grammar_file::load_grammar(input_filename)?;

    println!("Rules:");
    for (rule_idx, rule) in grammar.rules().iter().enumerate() {
        let rhs = if rule.is_epsilon() {
            "ε".to_owned()
        } else {
            labels(&grammar, rule.rhs.iter().cloned())
        };
        println!("  ({}) {} → {}", rule_idx, grammar.label(rule.lhs), rhs);
    }
    println!();
    println!("{}", generate_symbol_table(&grammar));
    Ok(())
}

fn labels<I: IntoIterator<Item = Symbol>>(grammar: &ContextFreeGrammar, symbols: I) -> String {
    symbols
        .into_iter()
        .map(|s| grammar.label(s))
        .collect::<Vec<_>>()
        .join(" ")
}

fn set_string(grammar: &ContextFreeGrammar, set: Option<&BTreeSet<Symbol>>) -> String {
    match set {
        Some(set) => format!("{{{}}}", labels(grammar, set.iter().cloned())),
        None => "".to_owned(),
    }
}

/// One row per symbol with its classification, FIRST and FOLLOW sets
fn generate_symbol_table(grammar: &ContextFreeGrammar) -> pt::Table {
    let mut table = pt::Table::new();
    table.add_row(row!["#", "Symbol", "Kind", "Nullable", "FIRST", "FOLLOW"]);

    for symbol in grammar.symbols() {
        let (kind, follow) = if grammar.is_terminal(symbol) {
            ("terminal", "".to_owned())
        } else {
            ("nonterminal", set_string(grammar, grammar.follow(symbol)))
        };
        let nullable = if grammar.is_nullable(symbol) { "yes" } else { "" };
        table.add_row(row![
            symbol.id(),
            grammar.label(symbol),
            kind,
            nullable,
            set_string(grammar, grammar.first(symbol)),
            follow
        ]);
    }
    table
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_symbol_table() {
        let grammar = grammar_file::parse_grammar("list -> x list |").unwrap();
        let table = generate_symbol_table(&grammar);

        let mut csv = Vec::new();
        table.to_csv(&mut csv).unwrap();
        let csv = String::from_utf8(csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "#,Symbol,Kind,Nullable,FIRST,FOLLOW");
        assert_eq!(lines[1], "0,$end,terminal,,{$end},");
        assert_eq!(lines[2], "1,list,nonterminal,yes,{x},{$end}");
        assert_eq!(lines[3], "2,x,terminal,,{x},");
    }
}
