use std::error::Error;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

use lrzero::{Action, ContextFreeGrammar, Grammar, ParseTable};

use crate::grammar_file;

pub fn write_graphviz_graph(
    input_filename: &str,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let (grammar, parse_table) = grammar_file::load_table(input_filename)?;
    let graphviz_string = render_graphviz_graph(&grammar, &parse_table);
    fs::write(output_filename, graphviz_string)?;
    Ok(())
}

pub fn show_graphviz_graph(filename: &str) -> Result<(), Box<dyn Error>> {
    let (grammar, parse_table) = grammar_file::load_table(filename)?;
    let graphviz_string = render_graphviz_graph(&grammar, &parse_table);
    // The viewer is picked by file extension, so the temp file needs a `.dot` name
    let mut temp_file = NamedTempFile::new()?;
    let path = format!("{}.dot", temp_file.path().to_string_lossy());
    write!(temp_file, "{}", graphviz_string)?;
    temp_file.persist(&path)?;
    open::that(&path)?;
    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_graphviz_graph(grammar: &ContextFreeGrammar, parse_table: &ParseTable) -> String {
    let mut lines = Vec::new();
    lines.push("digraph lr0_states {".to_owned());
    for (state_idx, state) in parse_table.states().iter().enumerate() {
        let table_rows: Vec<String> = state
            .iter()
            .map(|item| {
                let rule_string = escape_html(&item.augmented_rule_string(grammar));
                // Completed items are underlined
                let completed = item.is_pos_at_end(grammar).unwrap_or(false);
                if completed {
                    format!("      <TR><TD><U>{}</U></TD></TR>", rule_string)
                } else {
                    format!("      <TR><TD>{}</TD></TR>", rule_string)
                }
            })
            .collect();
        let table_row_string = table_rows.join("\n");
        let table_head = format!("      <TR><TD><B>State #{}</B></TD></TR>", state_idx);
        let line = format!(
            r#"  State{} [shape=plain label=<
    <TABLE BORDER="0" CELLBORDER="1" CELLSPACING="0">
{}
{}
    </TABLE>
  >];"#,
            state_idx, table_head, table_row_string
        );
        lines.push(line);

        if let Some(row) = parse_table.actions.row(state_idx) {
            for (symbol, action) in row.iter() {
                match action {
                    Action::Shift(other_state_idx) | Action::Goto(other_state_idx) => {
                        lines.push(format!(
                            r#"  State{} -> State{} [label="{}"];"#,
                            state_idx,
                            other_state_idx,
                            grammar.label(*symbol).replace('"', "\\\"")
                        ))
                    }
                    Action::Reduce(_) | Action::Accept => {}
                }
            }
        }
    }
    lines.push("}".to_owned());
    lines.join("\n")
}
