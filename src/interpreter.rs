/// The operator catalog.
///
/// Declares the seven operators (five binary glyphs and the two synthesized
/// unary markers) together with their arity, precedence tier and arithmetic.
///
/// # Responsibilities
/// - Maps symbols to operators and reports unknown symbols.
/// - Orders operators by precedence for the converter.
/// - Computes operator results with plain IEEE-754 semantics.
pub mod operator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads a raw expression, folds all bracket styles into round
/// brackets and produces a flat token stream. It then decides for each `+`
/// and `-` whether it is a binary operator or a unary sign.
///
/// # Responsibilities
/// - Normalizes `[]` and `{}` to `()`.
/// - Recognizes numbers, lowercase identifiers, operators and brackets.
/// - Rewrites prefix signs into unary markers.
pub mod lexer;
/// The parser module validates token streams and converts them to postfix.
///
/// # Responsibilities
/// - Rejects structurally illegal expressions before conversion.
/// - Converts infix token streams to postfix order.
pub mod parser;
/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator is a stack machine over postfix tokens. Variable values come
/// from a binding map supplied by the caller.
pub mod evaluator;
/// The postfix sequence type.
///
/// Wraps a converted token sequence and offers unknown extraction, evaluation
/// and rendering on it.
pub mod postfix;
