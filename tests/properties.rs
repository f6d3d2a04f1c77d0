use std::collections::HashMap;

use polish::{evaluate, parse_to_postfix};
use proptest::prelude::*;

const NAMES: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone)]
enum Operand {
    Number(u8),
    Variable(usize),
}

#[derive(Debug, Clone)]
enum Tree {
    Leaf(Operand),
    Node(Box<Tree>, char, Box<Tree>),
}

fn operand() -> impl Strategy<Value = Operand> {
    prop_oneof![(1u8..=9).prop_map(Operand::Number),
                (0..NAMES.len()).prop_map(Operand::Variable)]
}

fn operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

fn tree() -> impl Strategy<Value = Tree> {
    operand().prop_map(Tree::Leaf).prop_recursive(4, 32, 2, |inner| {
                                      (inner.clone(), operator(), inner).prop_map(|(l, op, r)| {
                                          Tree::Node(Box::new(l), op, Box::new(r))
                                      })
                                  })
}

fn values() -> impl Strategy<Value = [f64; 3]> {
    [1.0..50.0f64, 1.0..50.0f64, 1.0..50.0f64]
}

fn value_of(operand: &Operand, vars: &[f64; 3]) -> f64 {
    match operand {
        Operand::Number(n) => f64::from(*n),
        Operand::Variable(i) => vars[*i],
    }
}

fn text_of(operand: &Operand) -> String {
    match operand {
        Operand::Number(n) => n.to_string(),
        Operand::Variable(i) => NAMES[*i].to_string(),
    }
}

fn apply(op: char, l: f64, r: f64) -> f64 {
    match op {
        '+' => l + r,
        '-' => l - r,
        '*' => l * r,
        _ => l / r,
    }
}

/// Evaluates `operands[0] ops[0] operands[1] ...` with `*` and `/` binding
/// tighter than `+` and `-`, all left to right.
fn flat_reference(operands: &[f64], ops: &[char]) -> f64 {
    let mut terms = vec![operands[0]];
    let mut signs = Vec::new();
    for (op, value) in ops.iter().zip(&operands[1..]) {
        match op {
            '*' | '/' => {
                let last = terms.pop().unwrap();
                terms.push(apply(*op, last, *value));
            },
            _ => {
                signs.push(*op);
                terms.push(*value);
            },
        }
    }
    let mut total = terms[0];
    for (op, term) in signs.iter().zip(&terms[1..]) {
        total = apply(*op, total, *term);
    }
    total
}

fn tree_reference(tree: &Tree, vars: &[f64; 3]) -> f64 {
    match tree {
        Tree::Leaf(operand) => value_of(operand, vars),
        Tree::Node(l, op, r) => apply(*op, tree_reference(l, vars), tree_reference(r, vars)),
    }
}

fn tree_text(tree: &Tree, depth: usize) -> String {
    let (open, close) = [("(", ")"), ("[", "]"), ("{", "}")][depth % 3];
    match tree {
        Tree::Leaf(operand) => text_of(operand),
        Tree::Node(l, op, r) => {
            format!("{open}{}{op}{}{close}",
                    tree_text(l, depth + 1),
                    tree_text(r, depth + 1))
        },
    }
}

fn bindings(vars: &[f64; 3]) -> HashMap<String, f64> {
    NAMES.iter().map(|n| (*n).to_string()).zip(vars.iter().copied()).collect()
}

fn close(actual: f64, expected: f64) -> bool {
    actual == expected
    || (actual.is_nan() && expected.is_nan())
    || (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

proptest! {
    #[test]
    fn flat_expressions_follow_precedence(
        first in operand(),
        rest in prop::collection::vec((operator(), operand()), 0..8),
        vars in values(),
    ) {
        let mut text = text_of(&first);
        let mut operands = vec![value_of(&first, &vars)];
        let mut ops = Vec::new();
        for (op, operand) in &rest {
            text.push(*op);
            text.push_str(&text_of(operand));
            ops.push(*op);
            operands.push(value_of(operand, &vars));
        }

        let postfix = parse_to_postfix(&text).unwrap();
        let actual = evaluate(&postfix, &bindings(&vars)).unwrap();
        let expected = flat_reference(&operands, &ops);
        prop_assert!(close(actual, expected), "{text}: {actual} != {expected}");
    }

    #[test]
    fn bracketed_expressions_match_tree_evaluation(tree in tree(), vars in values()) {
        let text = tree_text(&tree, 0);
        let postfix = parse_to_postfix(&text).unwrap();
        let actual = evaluate(&postfix, &bindings(&vars)).unwrap();
        let expected = tree_reference(&tree, &vars);
        prop_assert!(close(actual, expected), "{text}: {actual} != {expected}");
    }
}
