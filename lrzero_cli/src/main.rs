use std::error::Error;
use std::process;

use clap::{App, AppSettings, Arg, SubCommand};

mod analysis;
mod check;
mod error;
mod grammar_file;
mod graphviz;
mod recognize;
mod states;
mod table;

fn main() {
    env_logger::init();
    if let Err(err) = cli() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn grammar_arg() -> Arg<'static, 'static> {
    Arg::with_name("file")
        .help("Grammar file with `lhs -> a b | c` rules")
        .required(true)
}

fn cli() -> Result<(), Box<dyn Error>> {
    let matches = App::new("lrzero_cli")
        .about("Tool for inspecting LR(0) automata and parse tables of context-free grammars")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            SubCommand::with_name("table")
                .arg(grammar_arg())
                .arg(
                    Arg::with_name("csv")
                        .long("--csv")
                        .takes_value(true)
                        .help("Write the parse table to a specified CSV file"),
                ).arg(
                    Arg::with_name("strict")
                        .long("--strict")
                        .help("Fail if the grammar is not LR(0)"),
                ).about("Prints the LR(0) parse table of a grammar"),
        ).subcommand(
            SubCommand::with_name("states")
                .arg(grammar_arg())
                .about("Lists the canonical collection of LR(0) item sets with their actions"),
        ).subcommand(
            SubCommand::with_name("graph")
                .arg(grammar_arg())
                .arg(
                    Arg::with_name("output")
                        .long("--output")
                        .short("-o")
                        .takes_value(true)
                        .help("Write the generated graphviz graph to a file (*.dot)"),
                ).about("Outputs a graphviz graph showing the LR(0) automaton of a grammar"),
        ).subcommand(
            SubCommand::with_name("grammar")
                .arg(grammar_arg())
                .about("Prints the augmented grammar with FIRST and FOLLOW sets"),
        ).subcommand(
            SubCommand::with_name("check")
                .arg(grammar_arg())
                .about("Reports all conflicts and fails unless the grammar is LR(0)"),
        ).subcommand(
            SubCommand::with_name("parse")
                .arg(grammar_arg())
                .arg(
                    Arg::with_name("tokens")
                        .help("Terminal labels of the input")
                        .multiple(true),
                ).about("Runs the LR(0) recognizer on a sequence of terminals"),
        ).setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    match matches.subcommand() {
        ("table", Some(table_opts)) => {
            let filename = table_opts.value_of("file").unwrap_or_default();
            let (grammar, parse_table) = grammar_file::load_table(filename)?;
            if let Some(csv_filename) = table_opts.value_of("csv") {
                table::write_table_csv(&grammar, &parse_table, csv_filename)?;
            } else {
                table::print_table(&grammar, &parse_table);
            }
            if table_opts.is_present("strict") {
                check::report_conflicts(&grammar, &parse_table)?;
            }
        }
        ("states", Some(opts)) => states::print_states(opts.value_of("file").unwrap_or_default())?,
        ("graph", Some(graph_opts)) => {
            let filename = graph_opts.value_of("file").unwrap_or_default();
            if let Some(output_filename) = graph_opts.value_of("output") {
                graphviz::write_graphviz_graph(filename, output_filename)?;
            } else {
                graphviz::show_graphviz_graph(filename)?;
            }
        }
        ("grammar", Some(opts)) => {
            analysis::print_grammar(opts.value_of("file").unwrap_or_default())?
        }
        ("check", Some(opts)) => check::check_grammar(opts.value_of("file").unwrap_or_default())?,
        ("parse", Some(parse_opts)) => {
            let filename = parse_opts.value_of("file").unwrap_or_default();
            let tokens: Vec<&str> = parse_opts
                .values_of("tokens")
                .map(|values| values.collect())
                .unwrap_or_default();
            recognize::parse_input(filename, &tokens)?;
        }
        _ => {}
    }

    Ok(())
}
