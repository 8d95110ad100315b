#![cfg(test)]

use std::collections::HashSet;

use lrzero::{
    Action, ConflictKind, Grammar, ParseError, ParseTable, Recognizer, SliceLexer, State,
};
use matches::assert_matches;
use test_utils::{arithmetic, dangling_else, epsilon_clash, symbols};

#[test]
fn test_arithmetic_automaton() {
    let grammar = arithmetic();
    let table = ParseTable::generate(&grammar).unwrap();

    assert_eq!(table.states().len(), 12);
    assert!(table.is_lr0());

    let unique: HashSet<&State> = table.states().iter().collect();
    assert_eq!(unique.len(), 12);
    for (idx, state) in table.states().iter().enumerate() {
        assert_eq!(table.state_id(state), Some(idx));
    }
}

#[test]
fn test_accept_arithmetic() {
    let grammar = arithmetic();
    let table = ParseTable::generate(&grammar).unwrap();
    let recognizer = Recognizer::new(&grammar, &table);

    let input = symbols(&grammar, "id + id * id");
    let mut lexer = SliceLexer::new(&input, grammar.end_symbol());
    let reductions = recognizer.recognize(&mut lexer).unwrap();
    // factor → id, term → factor, expr → term, ..., term → term * factor, expr → expr + term
    assert_eq!(reductions, vec![6, 4, 2, 6, 4, 6, 3, 1]);

    for accepted in &["id", "( id )", "( id + id ) * id", "id * ( id * id ) + id"] {
        let input = symbols(&grammar, accepted);
        let mut lexer = SliceLexer::new(&input, grammar.end_symbol());
        assert!(
            recognizer.recognize(&mut lexer).is_ok(),
            "expected `{}` to be accepted",
            accepted
        );
    }
}

#[test]
fn test_reject_arithmetic() {
    let grammar = arithmetic();
    let table = ParseTable::generate(&grammar).unwrap();
    let recognizer = Recognizer::new(&grammar, &table);
    let end = grammar.end_symbol();

    // Input ends where a shift is expected
    let input = symbols(&grammar, "id +");
    let result = recognizer.recognize(&mut SliceLexer::new(&input, end));
    assert_eq!(
        result,
        Err(ParseError::Unexpected {
            symbol: end,
            state: 7,
            range: 2..2,
        })
    );

    let input = symbols(&grammar, "id id");
    assert_matches!(
        recognizer.recognize(&mut SliceLexer::new(&input, end)),
        Err(ParseError::Unexpected { state: 1, .. })
    );

    for rejected in &["", "( id", "id )", "* id", "id + * id"] {
        let input = symbols(&grammar, rejected);
        assert_matches!(
            recognizer.recognize(&mut SliceLexer::new(&input, end)),
            Err(ParseError::Unexpected { .. })
        );
    }
}

#[test]
fn test_dangling_else() {
    let grammar = dangling_else();
    let table = ParseTable::generate(&grammar).unwrap();
    let else_ = grammar.symbol("else").unwrap();

    assert_eq!(table.conflicts.len(), 1);
    let conflict = table.conflicts[0];
    assert_eq!(conflict.state, 4);
    assert_eq!(conflict.symbol, else_);
    assert_eq!(conflict.kind(), ConflictKind::ShiftReduce);
    assert_eq!(table.action(4, else_), Some(Action::Shift(5)));

    // The retained shift binds `else` to the nearest `if`
    let recognizer = Recognizer::new(&grammar, &table);
    let input = symbols(&grammar, "if if other else other");
    let reductions = recognizer
        .recognize(&mut SliceLexer::new(&input, grammar.end_symbol()))
        .unwrap();
    assert_eq!(reductions, vec![3, 3, 2, 1]);
}

#[test]
fn test_conflicting_table_is_first_wins() {
    let grammar = epsilon_clash();
    let table = ParseTable::generate(&grammar).unwrap();
    let a = grammar.symbol("a").unwrap();
    let end = grammar.end_symbol();

    assert!(!table.is_lr0());
    assert_eq!(table.conflicts.len(), 1);
    assert_eq!(table.conflicts[0].kind(), ConflictKind::ShiftReduce);
    assert_eq!(table.action(0, a), Some(Action::Shift(1)));

    // The kept shift still recognizes `a a` ...
    let recognizer = Recognizer::new(&grammar, &table);
    let input = symbols(&grammar, "a a");
    assert_eq!(
        recognizer.recognize(&mut SliceLexer::new(&input, end)),
        Ok(vec![2, 1])
    );

    // ... but loses `a`, which needs the rejected ε-reduction
    let input = symbols(&grammar, "a");
    assert_eq!(
        recognizer.recognize(&mut SliceLexer::new(&input, end)),
        Err(ParseError::Unexpected {
            symbol: end,
            state: 1,
            range: 1..1,
        })
    );
}

#[test]
fn test_construction_is_deterministic() {
    for grammar in &[arithmetic(), dangling_else(), epsilon_clash()] {
        let first = ParseTable::generate(grammar).unwrap();
        let second = ParseTable::generate(grammar).unwrap();
        assert_eq!(first.states(), second.states());
        assert_eq!(first.actions, second.actions);
        assert_eq!(first.conflicts, second.conflicts);
    }
}
