use std::error::Error;
use std::fs::File;

use prettytable as pt;
use prettytable::cell;
use prettytable::row;

use lrzero::{ContextFreeGrammar, Grammar, ParseTable, Symbol};

pub fn print_table(grammar: &ContextFreeGrammar, parse_table: &ParseTable) {
    let pretty_table = generate_pretty_table(grammar, parse_table);
    println!("{}", pretty_table);
}

pub fn write_table_csv(
    grammar: &ContextFreeGrammar,
    parse_table: &ParseTable,
    csv_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let pretty_table = generate_pretty_table(grammar, parse_table);
    let csv_file = File::create(csv_filename)?;
    pretty_table.to_csv(csv_file)?;
    Ok(())
}

/// Columns of the table: all terminals, then every nonterminal that can appear in a goto
fn columns(grammar: &ContextFreeGrammar) -> Vec<Symbol> {
    let mut columns = grammar.terminals();
    columns.extend(
        grammar
            .nonterminals()
            .into_iter()
            .filter(|&n| n != grammar.start_symbol()),
    );
    columns
}

fn generate_pretty_table(grammar: &ContextFreeGrammar, parse_table: &ParseTable) -> pt::Table {
    let mut table = pt::Table::new();
    let columns = columns(grammar);

    let mut title_row = row!["#", "LR(0) items"];
    for symbol in columns.iter() {
        title_row.add_cell(cell!(grammar.label(*symbol)));
    }
    table.add_row(title_row);

    for (i, state) in parse_table.states().iter().enumerate() {
        let items: Vec<_> = state
            .iter()
            .map(|item| item.augmented_rule_string(grammar))
            .collect();

        let mut row = row![i, items.join("\n")];
        for symbol in columns.iter() {
            row.add_cell(cell![parse_table
                .action(i, *symbol)
                .map_or("".to_owned(), |a| a.to_string())]);
        }
        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grammar_file;

    #[test]
    fn test_pretty_table_layout() {
        let grammar = grammar_file::parse_grammar("s -> a s | b").unwrap();
        let parse_table = ParseTable::generate(&grammar).unwrap();
        let table = generate_pretty_table(&grammar, &parse_table);

        // Header plus one row per state
        assert_eq!(table.len(), parse_table.states().len() + 1);

        let mut csv = Vec::new();
        table.to_csv(&mut csv).unwrap();
        let csv = String::from_utf8(csv).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "#,LR(0) items,$end,a,b,s");
        assert!(csv.contains("acc"));
    }

    #[test]
    fn test_csv_from_loaded_table() {
        let grammar =
            grammar_file::parse_grammar("stmt -> if stmt | if stmt else stmt | other").unwrap();
        let parse_table = ParseTable::generate(&grammar).unwrap();
        let csv_file = tempfile::NamedTempFile::new().unwrap();
        let csv_filename = csv_file.path().to_string_lossy().into_owned();

        // The same table feeds the CSV output and the conflict check
        write_table_csv(&grammar, &parse_table, &csv_filename).unwrap();
        let written = std::fs::read_to_string(&csv_filename).unwrap();
        assert!(written.starts_with("#,LR(0) items,$end,if,else,other,stmt"));
        assert!(crate::check::report_conflicts(&grammar, &parse_table).is_err());
    }
}
