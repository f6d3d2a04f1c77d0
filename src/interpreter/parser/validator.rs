use crate::{
    error::ParseError,
    interpreter::{lexer::Token, operator::Operator, parser::ParseResult},
};

/// Checks that a token sequence is structurally well formed.
///
/// The sequence is rejected when:
/// - it is empty,
/// - the last token is not an operand or a bracket,
/// - the first token is not an operand, a bracket or a unary sign,
/// - an operand or `)` is directly followed by an operand or `(`,
/// - an operator is directly followed by `)`,
/// - a bracket pair encloses nothing,
/// - a `)` has no open `(` before it, or a `(` is never closed.
///
/// The leading check accepts a sign where the trailing check does not.
///
/// # Errors
/// Returns the [`ParseError`] describing the first violation found.
///
/// # Example
/// ```
/// use polish::interpreter::{lexer::tokenize, parser::validator::validate};
///
/// assert!(validate(&tokenize("-(x + 1)").unwrap()).is_ok());
/// assert!(validate(&tokenize("1 +").unwrap()).is_err());
/// ```
pub fn validate(tokens: &[Token]) -> ParseResult<()> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(ParseError::EmptyExpression);
    };

    if !last.is_operand() && !last.is_paren() {
        return Err(ParseError::InvalidTrailingToken { token: last.to_string() });
    }

    let signed = matches!(first,
                          Token::Operator(Operator::UnaryPlus | Operator::UnaryMinus));
    if !first.is_operand() && !first.is_paren() && !signed {
        return Err(ParseError::InvalidLeadingToken { token: first.to_string() });
    }

    check_adjacency(tokens)?;
    check_brackets(tokens)
}

fn check_adjacency(tokens: &[Token]) -> ParseResult<()> {
    for (i, pair) in tokens.windows(2).enumerate() {
        let (left, right) = (&pair[0], &pair[1]);
        let ends_operand = left.is_operand() || *left == Token::CloseParen;
        let starts_operand = right.is_operand() || *right == Token::OpenParen;

        if ends_operand && starts_operand {
            return Err(ParseError::AdjacentOperands { left:     left.to_string(),
                                                      right:    right.to_string(),
                                                      position: i + 2, });
        }
        if let Token::Operator(op) = left
           && *right == Token::CloseParen
        {
            return Err(ParseError::OperatorBeforeClose { token:    op.to_string(),
                                                         position: i + 2, });
        }
        if *left == Token::OpenParen && *right == Token::CloseParen {
            return Err(ParseError::EmptyBrackets { position: i + 2 });
        }
    }
    Ok(())
}

fn check_brackets(tokens: &[Token]) -> ParseResult<()> {
    let mut open = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => open += 1,
            Token::CloseParen => {
                open = open.checked_sub(1)
                           .ok_or(ParseError::UnbalancedBrackets { position: i + 1 })?;
            },
            _ => {},
        }
    }

    if open == 0 {
        Ok(())
    } else {
        Err(ParseError::UnclosedBrackets { count: open })
    }
}
