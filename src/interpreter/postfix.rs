use std::collections::HashMap;

use crate::interpreter::{
    evaluator::{EvalResult, evaluate},
    lexer::Token,
};

/// A token sequence in postfix (Reverse Polish) order.
///
/// Produced by [`crate::parse_to_postfix`]. Evaluation and rendering only
/// borrow the sequence, so one `Postfix` can be shown, inspected for unknowns
/// and evaluated against several binding maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Returns the variable names in order of first appearance, without
    /// duplicates.
    #[must_use]
    pub fn unknowns(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for token in &self.tokens {
            if let Token::Identifier(name) = token
               && !names.contains(name)
            {
                names.push(name.clone());
            }
        }
        names
    }

    /// Evaluates the sequence with the given variable values.
    ///
    /// See [`evaluate`] for the evaluation rules and errors.
    pub fn evaluate(&self, bindings: &HashMap<String, f64>) -> EvalResult<f64> {
        evaluate(&self.tokens, bindings)
    }

    /// Renders the sequence for display.
    ///
    /// Every token is followed by a single space, and the unary markers are
    /// written as `u+` and `u-`. The output is meant for people: it cannot be
    /// fed back to the lexer.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "{token} ")?;
        }
        Ok(())
    }
}
