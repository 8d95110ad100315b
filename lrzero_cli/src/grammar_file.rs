use std::error::Error;
use std::fs;

use combine::{attempt, eof, many, many1, not_followed_by, satisfy, sep_by1, skip_many, token};
use combine::{ParseError, Parser, Stream};
use thiserror::Error;

use lrzero::{ContextFreeGrammar, GrammarBuilder, GrammarError, ParseTable};

#[derive(Debug, Error)]
pub enum GrammarFileError {
    #[error("Could not read grammar file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: expected a rule of the form `lhs -> a b | c`")]
    Syntax { line: usize },
    #[error("Line {line}: unknown directive `{directive}`")]
    UnknownDirective { line: usize, directive: String },
    #[error("Line {line}: `{directive}` expects {expected}")]
    DirectiveArguments {
        line: usize,
        directive: String,
        expected: &'static str,
    },
    #[error("Grammar file contains no rules")]
    NoRules,
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

pub fn load_grammar(filename: &str) -> Result<ContextFreeGrammar, GrammarFileError> {
    let content = fs::read_to_string(filename)?;
    parse_grammar(&content)
}

/// Load a grammar file and build its LR(0) parse table
pub fn load_table(filename: &str) -> Result<(ContextFreeGrammar, ParseTable), Box<dyn Error>> {
    let grammar = load_grammar(filename)?;
    let parse_table = ParseTable::generate(&grammar)?;
    Ok((grammar, parse_table))
}

/// Build a grammar from its textual description
///
/// Symbols get their ids in order of first appearance, `%token` declarations included. Every
/// symbol on a left-hand side is a nonterminal, everything else is a terminal. Without a
/// `%start` directive the left-hand side of the first rule is the start symbol. A symbol name
/// ends at whitespace, `|` or `->`, so `a->b` is the rule `a -> b`.
pub fn parse_grammar(source: &str) -> Result<ContextFreeGrammar, GrammarFileError> {
    let mut builder = GrammarBuilder::new();
    let mut start: Option<String> = None;
    let mut first_lhs: Option<String> = None;

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('%') {
            let mut words = line.split_whitespace();
            let directive = words.next().unwrap_or("");
            let args: Vec<&str> = words.collect();
            match directive {
                "%token" => {
                    if args.is_empty() {
                        return Err(GrammarFileError::DirectiveArguments {
                            line: line_no,
                            directive: directive.to_owned(),
                            expected: "at least one symbol",
                        });
                    }
                    for label in args {
                        builder.add_token(label);
                    }
                }
                "%start" => {
                    if args.len() != 1 {
                        return Err(GrammarFileError::DirectiveArguments {
                            line: line_no,
                            directive: directive.to_owned(),
                            expected: "exactly one symbol",
                        });
                    }
                    start = Some(args[0].to_owned());
                }
                _ => {
                    return Err(GrammarFileError::UnknownDirective {
                        line: line_no,
                        directive: directive.to_owned(),
                    })
                }
            }
            continue;
        }

        let (decl, _) = rule_decl()
            .parse(line)
            .map_err(|_| GrammarFileError::Syntax { line: line_no })?;

        let lhs = builder.add_token(&decl.lhs);
        if first_lhs.is_none() {
            first_lhs = Some(decl.lhs.clone());
        }
        for alternative in decl.alternatives {
            let rhs: Vec<_> = alternative
                .iter()
                .map(|label| builder.add_token(label))
                .collect();
            builder.add_rule(lhs, &rhs)?;
        }
    }

    let start_label = start.or(first_lhs).ok_or(GrammarFileError::NoRules)?;
    let start_symbol = builder.add_token(&start_label);
    builder.set_start(start_symbol)?;
    Ok(builder.build()?)
}

/// Rule declaration as written, `lhs -> alternative | alternative`
#[derive(Debug)]
struct RuleDecl {
    lhs: String,
    alternatives: Vec<Vec<String>>,
}

fn rule_decl<I>() -> impl Parser<Input = I, Output = RuleDecl>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    (
        blanks().with(symbol_name()),
        rule_separator(),
        sep_by1::<Vec<Vec<String>>, _, _>(alternative(), token('|').skip(blanks())),
        eof(),
    )
        .map(|(lhs, _, alternatives, _eof)| RuleDecl { lhs, alternatives })
}

/// Possibly empty sequence of symbols; empty means ε
fn alternative<I>() -> impl Parser<Input = I, Output = Vec<String>>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    many::<Vec<String>, _>(symbol_name())
}

fn symbol_name<I>() -> impl Parser<Input = I, Output = String>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    many1::<String, _>(symbol_char()).skip(blanks())
}

/// Any character but whitespace and `|`; `-` only when it does not start `->`
fn symbol_char<I>() -> impl Parser<Input = I, Output = char>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    let plain = satisfy(|c: char| !c.is_whitespace() && c != '|' && c != '-');
    let dash = attempt(token('-').skip(not_followed_by(token('>').map(|_| "->"))));
    plain.or(dash)
}

fn rule_separator<I>() -> impl Parser<Input = I, Output = ()>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    (token('-'), token('>')).skip(blanks()).map(|_| ())
}

fn blanks<I>() -> impl Parser<Input = I, Output = ()>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    skip_many(satisfy(|c: char| c == ' ' || c == '\t'))
}

#[cfg(test)]
mod test {
    use super::*;
    use lrzero::{Grammar, Rule, Symbol};
    use matches::assert_matches;

    const ARITHMETIC: &str = "
        # Classic expression grammar
        %token id + * ( )
        %start expr

        expr   -> expr + term | term
        term   -> term * factor | factor
        factor -> ( expr ) | id
    ";

    #[test]
    fn test_parse_arithmetic() {
        let grammar = parse_grammar(ARITHMETIC).unwrap();
        let labels: Vec<&str> = grammar.symbols().into_iter().map(|s| grammar.label(s)).collect();
        assert_eq!(
            labels,
            vec!["$end", "id", "+", "*", "(", ")", "expr", "term", "factor", "expr'"]
        );
        assert_eq!(grammar.rule_count(), 7);
        assert_eq!(
            grammar.rule(1),
            Some(&Rule::new(Symbol(6), vec![Symbol(6), Symbol(2), Symbol(7)]))
        );
        assert_eq!(grammar.rule(6), Some(&Rule::new(Symbol(8), vec![Symbol(1)])));
        assert_eq!(grammar.user_start_symbol(), Symbol(6));
    }

    #[test]
    fn test_epsilon_alternatives_and_default_start() {
        let grammar = parse_grammar("list -> item list |\nitem -> x").unwrap();
        let list = grammar.symbol("list").unwrap();
        let x = grammar.symbol("x").unwrap();
        assert_eq!(grammar.user_start_symbol(), list);
        assert!(grammar.rule(2).unwrap().is_epsilon());
        assert!(grammar.is_terminal(x));
        assert!(!grammar.is_terminal(list));
    }

    #[test]
    fn test_arrow_ends_symbol_names() {
        let grammar = parse_grammar("e->e - n|n").unwrap();
        let e = grammar.symbol("e").unwrap();
        let minus = grammar.symbol("-").unwrap();
        let n = grammar.symbol("n").unwrap();
        assert_eq!(grammar.rule(1), Some(&Rule::new(e, vec![e, minus, n])));
        assert_eq!(grammar.rule(2), Some(&Rule::new(e, vec![n])));
        assert_eq!(grammar.symbol("->"), None);

        assert_matches!(
            parse_grammar("a -> b -> c"),
            Err(GrammarFileError::Syntax { line: 1 })
        );
    }

    #[test]
    fn test_errors() {
        assert_matches!(
            parse_grammar("a -> b\n\nexpr term"),
            Err(GrammarFileError::Syntax { line: 3 })
        );
        assert_matches!(
            parse_grammar("%left +\na -> b"),
            Err(GrammarFileError::UnknownDirective { line: 1, .. })
        );
        assert_matches!(
            parse_grammar("%start a b\na -> b"),
            Err(GrammarFileError::DirectiveArguments { line: 1, .. })
        );
        assert_matches!(parse_grammar("# nothing"), Err(GrammarFileError::NoRules));
        assert_matches!(
            parse_grammar("%start s\na -> b"),
            Err(GrammarFileError::Grammar(GrammarError::MissingStartRule(_)))
        );
    }
}
