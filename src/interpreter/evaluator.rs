use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, operator::Arity},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed as they are, identifiers are looked up in `bindings`,
/// and every operator pops its operands and pushes its result. The sequence is
/// only read, so it can be rendered or evaluated again afterwards.
///
/// When an operator finds no value left for its first operand, `0.0` is used
/// instead, so `1+*2` evaluates to `2`.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order.
/// - `bindings`: Values for every identifier in `postfix`.
///
/// # Errors
/// - `UnboundVariable` if an identifier has no entry in `bindings`.
/// - `UnknownOperator` if a bracket made it into the sequence.
/// - `MalformedPostfix` if a binary operator finds no operand at all, or the
///   evaluation does not end with exactly one value.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use polish::interpreter::{evaluator::evaluate, lexer::Token, operator::Operator};
///
/// let postfix = [Token::Identifier("x".to_string()),
///                Token::Number(3.0),
///                Token::Operator(Operator::Mul)];
/// let bindings = HashMap::from([("x".to_string(), 2.0)]);
/// assert_eq!(evaluate(&postfix, &bindings).unwrap(), 6.0);
/// ```
pub fn evaluate(postfix: &[Token], bindings: &HashMap<String, f64>) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Identifier(name) => {
                let value = bindings.get(name)
                                    .copied()
                                    .ok_or_else(|| RuntimeError::UnboundVariable { name:
                                                                                       name.clone() })?;
                stack.push(value);
            },
            Token::Operator(op) => {
                let operand2 = match op.arity() {
                    Arity::Binary => stack.pop()
                                          .ok_or(RuntimeError::MalformedPostfix { remaining: 0 })?,
                    Arity::Unary => 0.0,
                };
                let operand1 = stack.pop().unwrap_or_else(|| {
                                              log::warn!("'{op}' has no operand left, using 0");
                                              0.0
                                          });
                stack.push(op.eval(operand1, operand2));
            },
            Token::OpenParen | Token::CloseParen | Token::Ignored => {
                return Err(RuntimeError::UnknownOperator { symbol: token.to_string() });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(RuntimeError::MalformedPostfix { remaining: rest.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::Operator;

    fn num(n: f64) -> Token {
        Token::Number(n)
    }

    fn op(op: Operator) -> Token {
        Token::Operator(op)
    }

    #[test]
    fn evaluates_binary_operators_in_order() {
        let postfix = [num(7.0), num(2.0), op(Operator::Sub), num(3.0), op(Operator::Pow)];
        assert_eq!(evaluate(&postfix, &HashMap::new()), Ok(125.0));
    }

    #[test]
    fn unary_operators_take_one_operand() {
        let postfix = [num(5.0), op(Operator::UnaryMinus), num(2.0), op(Operator::Add)];
        assert_eq!(evaluate(&postfix, &HashMap::new()), Ok(-3.0));
        let postfix = [num(5.0), op(Operator::UnaryPlus)];
        assert_eq!(evaluate(&postfix, &HashMap::new()), Ok(5.0));
    }

    #[test]
    fn identifiers_are_looked_up() {
        let bindings = HashMap::from([("x".to_string(), 4.0), ("y".to_string(), 0.5)]);
        let postfix = [Token::Identifier("x".to_string()),
                       Token::Identifier("y".to_string()),
                       op(Operator::Div)];
        assert_eq!(evaluate(&postfix, &bindings), Ok(8.0));
    }

    #[test]
    fn missing_binding_is_an_error() {
        let postfix = [Token::Identifier("y".to_string())];
        assert_eq!(evaluate(&postfix, &HashMap::new()),
                   Err(RuntimeError::UnboundVariable { name: "y".to_string() }));
    }

    #[test]
    fn missing_first_operand_defaults_to_zero() {
        let postfix = [num(2.0), op(Operator::Mul)];
        assert_eq!(evaluate(&postfix, &HashMap::new()), Ok(0.0));
        let postfix = [num(2.0), op(Operator::Sub)];
        assert_eq!(evaluate(&postfix, &HashMap::new()), Ok(-2.0));
    }

    #[test]
    fn binary_operator_without_operands_is_malformed() {
        assert_eq!(evaluate(&[op(Operator::Add)], &HashMap::new()),
                   Err(RuntimeError::MalformedPostfix { remaining: 0 }));
    }

    #[test]
    fn leftover_values_are_malformed() {
        assert_eq!(evaluate(&[num(1.0), num(2.0)], &HashMap::new()),
                   Err(RuntimeError::MalformedPostfix { remaining: 2 }));
        assert_eq!(evaluate(&[], &HashMap::new()),
                   Err(RuntimeError::MalformedPostfix { remaining: 0 }));
    }

    #[test]
    fn brackets_in_postfix_are_rejected() {
        assert_eq!(evaluate(&[Token::OpenParen], &HashMap::new()),
                   Err(RuntimeError::UnknownOperator { symbol: "(".to_string() }));
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let postfix = [num(1.0), num(0.0), op(Operator::Div)];
        assert_eq!(evaluate(&postfix, &HashMap::new()), Ok(f64::INFINITY));
    }
}
