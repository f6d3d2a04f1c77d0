use crate::interpreter::lexer::Token;

/// Converts an infix token sequence to postfix with the shunting-yard
/// algorithm.
///
/// Operands go straight to the output. A binary operator first moves every
/// stacked operator of greater or equal precedence to the output, which makes
/// all binary operators left associative, `^` included: `2^3^2` is `(2^3)^2`.
/// Unary markers are prefix operators and are pushed without popping anything.
/// Chained signs are the only input where this differs from applying the
/// plain `>=` rule to every operator: `--3` becomes `3 u- u-`.
/// A `)` moves operators to the output until the matching `(`, which is
/// discarded. Whatever is left on the stack at the end is appended.
///
/// No errors are raised here: an unmatched `)` simply empties the stack, since
/// bracket balance is the validator's job.
///
/// # Example
/// ```
/// use polish::interpreter::{lexer::tokenize, parser::converter::to_postfix};
///
/// let postfix = to_postfix(tokenize("a+b*c").unwrap());
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["a", "b", "c", "*", "+"]);
/// ```
#[must_use]
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::OpenParen => stack.push(token),
            Token::Operator(op) => {
                if !op.is_unary() {
                    while let Some(&Token::Operator(top)) = stack.last()
                          && top.precedence() >= op.precedence()
                    {
                        log::trace!("'{op}' pops '{top}'");
                        output.extend(stack.pop());
                    }
                }
                stack.push(token);
            },
            Token::CloseParen => {
                while let Some(item) = stack.pop() {
                    if item == Token::OpenParen {
                        break;
                    }
                    output.push(item);
                }
            },
            Token::Ignored => {},
            operand => output.push(operand),
        }
    }

    while let Some(item) = stack.pop() {
        output.push(item);
    }

    output
}
