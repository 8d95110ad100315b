use std::error::Error;

use lrzero::{ContextFreeGrammar, Grammar, ParseError, Recognizer, RuleId, SliceLexer, Symbol};

use crate::error::CliError;
use crate::grammar_file;

/// Run the recognizer over whitespace separated terminal labels and print the reductions
pub fn parse_input(input_filename: &str, tokens: &[&str]) -> Result<(), Box<dyn Error>> {
    let (grammar, parse_table) = grammar_file::load_table(input_filename)?;
    if !parse_table.is_lr0() {
        log::warn!(
            "grammar has {} conflict(s), the first action of each entry is used",
            parse_table.conflicts.len()
        );
    }

    let input = terminals(&grammar, tokens)?;
    let recognizer = Recognizer::new(&grammar, &parse_table);
    let reductions = recognizer
        .recognize(&mut SliceLexer::new(&input, grammar.end_symbol()))
        .map_err(|err| describe_error(&grammar, err))?;

    for line in reduction_lines(&grammar, &reductions) {
        println!("{}", line);
    }
    println!("Accepted");
    Ok(())
}

fn terminals(grammar: &ContextFreeGrammar, tokens: &[&str]) -> Result<Vec<Symbol>, CliError> {
    tokens
        .iter()
        .map(|label| match grammar.symbol(label) {
            Some(symbol) if grammar.is_terminal(symbol) && symbol != grammar.end_symbol() => {
                Ok(symbol)
            }
            _ => Err(CliError::UnknownTerminal((*label).to_owned())),
        })
        .collect()
}

fn describe_error(grammar: &ContextFreeGrammar, err: ParseError) -> CliError {
    match err {
        ParseError::Unexpected {
            symbol,
            state,
            range,
        } => CliError::Rejected {
            state,
            symbol: grammar.label(symbol).to_owned(),
            position: range.start + 1,
        },
        ParseError::MalformedTable { state, symbol } => CliError::MalformedTable {
            state,
            symbol: grammar.label(symbol).to_owned(),
        },
    }
}

fn reduction_lines(grammar: &ContextFreeGrammar, reductions: &[RuleId]) -> Vec<String> {
    reductions
        .iter()
        .filter_map(|&rule_idx| grammar.rule(rule_idx).map(|rule| (rule_idx, rule)))
        .map(|(rule_idx, rule)| {
            let rhs: Vec<&str> = rule.rhs.iter().map(|&s| grammar.label(s)).collect();
            let rhs = if rhs.is_empty() {
                "ε".to_owned()
            } else {
                rhs.join(" ")
            };
            format!("reduce ({}) {} → {}", rule_idx, grammar.label(rule.lhs), rhs)
        })
        .collect()
}
