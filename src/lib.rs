//! # polish
//!
//! polish converts infix arithmetic expressions to postfix (Reverse Polish)
//! notation and evaluates them. Expressions may contain numbers, lowercase
//! variable names, the binary operators `+ - * / ^`, unary `+` and `-`, and
//! round, square or curly brackets.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::implicit_hasher)]

use std::collections::HashMap;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::tokenize,
        parser::{converter::to_postfix, validator::validate},
    },
};
pub use crate::interpreter::postfix::Postfix;

/// Provides unified error types for parsing, evaluation and batch runs.
///
/// This module defines every error that can be raised while tokenizing,
/// validating, evaluating or batch-processing expressions.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Carries the offending token, variable or file for user feedback.
/// - Separates per-expression failures from fatal ones.
pub mod error;
/// Implements the expression pipeline.
///
/// Ties together the operator catalog, the lexer, the validator, the
/// shunting-yard converter and the postfix evaluator.
///
/// # Responsibilities
/// - Turns raw text into tokens and rejects malformed input.
/// - Converts infix token streams to postfix order.
/// - Evaluates postfix sequences against variable bindings.
pub mod interpreter;
/// Supplies values for variables.
///
/// Declares the `VariableResolver` capability and its implementations: a
/// pre-seeded map, an interactive prompt and a combination of both.
pub mod resolver;
/// Processes files of expressions.
///
/// Reads expressions line by line, reports their postfix form and value, and
/// writes the postfix forms to an output file. A bad line never stops the run.
pub mod batch;

/// Converts an infix expression to postfix form.
///
/// The expression is tokenized, validated and run through the shunting-yard
/// converter.
///
/// # Errors
/// Returns a [`ParseError`] if the expression is structurally illegal.
///
/// # Examples
/// ```
/// use polish::parse_to_postfix;
///
/// let postfix = parse_to_postfix("[1+2]*{3}").unwrap();
/// assert_eq!(postfix.render(), "1 2 + 3 * ");
///
/// assert!(parse_to_postfix("(1+2").is_err());
/// ```
pub fn parse_to_postfix(expression: &str) -> Result<Postfix, ParseError> {
    let tokens = tokenize(expression)?;
    validate(&tokens)?;

    let postfix = Postfix::new(to_postfix(tokens));
    log::debug!("{expression:?} -> {postfix}");
    Ok(postfix)
}

/// Returns the variable names of a postfix sequence in order of first
/// appearance, without duplicates.
///
/// # Examples
/// ```
/// use polish::{collect_unknowns, parse_to_postfix};
///
/// let postfix = parse_to_postfix("x*y+x").unwrap();
/// assert_eq!(collect_unknowns(&postfix), ["x", "y"]);
/// ```
#[must_use]
pub fn collect_unknowns(postfix: &Postfix) -> Vec<String> {
    postfix.unknowns()
}

/// Evaluates a postfix sequence.
///
/// `bindings` must hold a value for every name returned by
/// [`collect_unknowns`].
///
/// # Errors
/// Returns [`RuntimeError::UnboundVariable`] if a variable has no value, or an
/// internal error if the sequence is malformed.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use polish::{evaluate, parse_to_postfix};
///
/// let postfix = parse_to_postfix("x+y").unwrap();
/// let bindings = HashMap::from([("x".to_string(), 2.0), ("y".to_string(), 3.0)]);
/// assert_eq!(evaluate(&postfix, &bindings).unwrap(), 5.0);
/// ```
pub fn evaluate(postfix: &Postfix, bindings: &HashMap<String, f64>) -> Result<f64, RuntimeError> {
    postfix.evaluate(bindings)
}

/// Renders a postfix sequence for display, writing unary signs as `u+` and
/// `u-`.
///
/// # Examples
/// ```
/// use polish::{parse_to_postfix, render};
///
/// assert_eq!(render(&parse_to_postfix("-a+b").unwrap()), "a u- b + ");
/// ```
#[must_use]
pub fn render(postfix: &Postfix) -> String {
    postfix.render()
}
