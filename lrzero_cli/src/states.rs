use std::error::Error;
use std::fmt::Write;

use lrzero::{ContextFreeGrammar, Grammar, ParseTable};

use crate::grammar_file;

pub fn print_states(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let (grammar, parse_table) = grammar_file::load_table(input_filename)?;
    print!("{}", render_states(&grammar, &parse_table)?);
    Ok(())
}

/// Human readable listing of the canonical collection with the actions of every state
fn render_states(
    grammar: &ContextFreeGrammar,
    parse_table: &ParseTable,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for (state_idx, state) in parse_table.states().iter().enumerate() {
        writeln!(out, "State {}", state_idx)?;
        for item in state.iter() {
            writeln!(
                out,
                "  Rule ({}): {}",
                item.rule_idx,
                item.augmented_rule_string(grammar)
            )?;
        }
        if let Some(row) = parse_table.actions.row(state_idx) {
            for (symbol, action) in row.iter() {
                writeln!(out, "    {} => {}", grammar.label(*symbol), action)?;
            }
        }
        writeln!(out)?;
    }

    if !parse_table.is_lr0() {
        writeln!(out, "{} conflict(s):", parse_table.conflicts.len())?;
        for conflict in parse_table.conflicts.iter() {
            writeln!(out, "  {}", conflict.describe(grammar))?;
        }
    }
    Ok(out)
}
