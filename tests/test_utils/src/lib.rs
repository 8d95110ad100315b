use lrzero::{ContextFreeGrammar, GrammarBuilder, Symbol};

/// expr → expr + term | term, term → term * factor | factor, factor → ( expr ) | id
pub fn arithmetic() -> ContextFreeGrammar {
    let mut builder = GrammarBuilder::new();
    let id = builder.add_token("id");
    let plus = builder.add_token("+");
    let times = builder.add_token("*");
    let lpar = builder.add_token("(");
    let rpar = builder.add_token(")");
    let expr = builder.add_token("expr");
    let term = builder.add_token("term");
    let factor = builder.add_token("factor");

    builder.add_rule(expr, &[expr, plus, term]).unwrap();
    builder.add_rule(expr, &[term]).unwrap();
    builder.add_rule(term, &[term, times, factor]).unwrap();
    builder.add_rule(term, &[factor]).unwrap();
    builder.add_rule(factor, &[lpar, expr, rpar]).unwrap();
    builder.add_rule(factor, &[id]).unwrap();
    builder.set_start(expr).unwrap();

    builder.build().unwrap()
}

/// stmt → if stmt | if stmt else stmt | other
pub fn dangling_else() -> ContextFreeGrammar {
    let mut builder = GrammarBuilder::new();
    let if_ = builder.add_token("if");
    let else_ = builder.add_token("else");
    let other = builder.add_token("other");
    let stmt = builder.add_token("stmt");

    builder.add_rule(stmt, &[if_, stmt]).unwrap();
    builder.add_rule(stmt, &[if_, stmt, else_, stmt]).unwrap();
    builder.add_rule(stmt, &[other]).unwrap();
    builder.set_start(stmt).unwrap();

    builder.build().unwrap()
}

/// S → A a, A → a | ε
///
/// Not LR(0): the start state can both shift `a` and reduce the empty `A`.
pub fn epsilon_clash() -> ContextFreeGrammar {
    let mut builder = GrammarBuilder::new();
    let a = builder.add_token("a");
    let s = builder.add_token("S");
    let big_a = builder.add_token("A");

    builder.add_rule(s, &[big_a, a]).unwrap();
    builder.add_rule(big_a, &[a]).unwrap();
    builder.add_rule(big_a, &[]).unwrap();
    builder.set_start(s).unwrap();

    builder.build().unwrap()
}

/// Translate whitespace separated labels into symbols
pub fn symbols(grammar: &ContextFreeGrammar, input: &str) -> Vec<Symbol> {
    input
        .split_whitespace()
        .map(|label| {
            grammar
                .symbol(label)
                .unwrap_or_else(|| panic!("unknown symbol `{}`", label))
        })
        .collect()
}
