use std::error::Error;

use lrzero::{ConflictKind, Grammar, ParseTable};

use crate::error::CliError;
use crate::grammar_file;

/// Print every conflict of the table and fail unless there are none
pub fn check_grammar(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let (grammar, parse_table) = grammar_file::load_table(input_filename)?;
    report_conflicts(&grammar, &parse_table)?;
    println!(
        "Grammar is LR(0): {} states, {} actions",
        parse_table.states().len(),
        parse_table.actions.len()
    );
    Ok(())
}

pub fn report_conflicts<G: Grammar>(grammar: &G, parse_table: &ParseTable) -> Result<(), CliError> {
    if parse_table.is_lr0() {
        return Ok(());
    }
    for conflict in parse_table.conflicts.iter() {
        eprintln!("{}", conflict.describe(grammar));
    }
    let count = |kind: ConflictKind| {
        parse_table
            .conflicts
            .iter()
            .filter(|c| c.kind() == kind)
            .count()
    };
    eprintln!(
        "{} shift-reduce, {} reduce-reduce",
        count(ConflictKind::ShiftReduce),
        count(ConflictKind::ReduceReduce)
    );
    Err(CliError::NotLr0(parse_table.conflicts.len()))
}
