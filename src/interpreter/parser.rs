use crate::error::ParseError;

/// Structural validation of token sequences.
///
/// Rejects empty expressions, illegal leading or trailing tokens, operands
/// without an operator between them and unbalanced brackets, before any
/// conversion takes place.
pub mod validator;

/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm over a validated token sequence,
/// using the fixed precedence table of the operator catalog.
pub mod converter;

/// Result type used by the lexer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;
