/// Parsing errors.
///
/// Defines every way an expression can be rejected before it is converted to
/// postfix form: unknown characters, bad leading or trailing tokens, operands
/// without an operator between them and unbalanced brackets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a postfix sequence or while
/// resolving the values of its variables.
pub mod runtime_error;
/// Batch errors.
///
/// Failures that stop a whole batch run instead of a single expression.
pub mod batch_error;

pub use batch_error::BatchError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
