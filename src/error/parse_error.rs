#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all the ways an expression can be structurally illegal.
///
/// Every variant is an illegal operation input: the caller is expected to skip
/// the offending expression and carry on with the next one.
pub enum ParseError {
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// Found text that is neither a number, a lowercase identifier, an operator
    /// nor a bracket.
    UnrecognizedToken {
        /// The offending text.
        token:    String,
        /// The 1-based token position where the text was found.
        position: usize,
    },
    /// The first token cannot start an expression.
    InvalidLeadingToken {
        /// The offending token, as written.
        token: String,
    },
    /// The last token cannot end an expression.
    InvalidTrailingToken {
        /// The offending token, as written.
        token: String,
    },
    /// Two operands follow each other without an operator in between.
    AdjacentOperands {
        /// The left operand.
        left:     String,
        /// The right operand.
        right:    String,
        /// The 1-based position of the right operand.
        position: usize,
    },
    /// An operator is directly followed by a closing bracket, so it has no
    /// right operand.
    OperatorBeforeClose {
        /// The operator, as written.
        token:    String,
        /// The 1-based position of the closing bracket.
        position: usize,
    },
    /// A bracket pair encloses nothing.
    EmptyBrackets {
        /// The 1-based position of the closing bracket.
        position: usize,
    },
    /// A closing bracket has no matching opening bracket.
    UnbalancedBrackets {
        /// The 1-based position of the closing bracket.
        position: usize,
    },
    /// Opening brackets were never closed.
    UnclosedBrackets {
        /// How many brackets are still open at the end of the expression.
        count: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Illegal operation input: ")?;
        match self {
            Self::EmptyExpression => write!(f, "the expression is empty."),
            Self::UnrecognizedToken { token, position } => {
                write!(f, "unrecognized token '{token}' at position {position}.")
            },
            Self::InvalidLeadingToken { token } => {
                write!(f, "an expression cannot start with '{token}'.")
            },
            Self::InvalidTrailingToken { token } => {
                write!(f, "an expression cannot end with '{token}'.")
            },
            Self::AdjacentOperands { left,
                                     right,
                                     position, } => write!(f,
                                                           "missing operator between '{left}' and '{right}' at position {position}."),
            Self::OperatorBeforeClose { token, position } => write!(f,
                                                                    "operator '{token}' is followed by a closing bracket at position {position}."),
            Self::EmptyBrackets { position } => {
                write!(f, "empty brackets closed at position {position}.")
            },
            Self::UnbalancedBrackets { position } => write!(f,
                                                            "closing bracket at position {position} has no opening bracket."),
            Self::UnclosedBrackets { count } => write!(f, "{count} bracket(s) left unclosed."),
        }
    }
}

impl std::error::Error for ParseError {}
