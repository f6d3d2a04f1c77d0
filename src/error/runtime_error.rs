#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// A variable in the postfix sequence has no value bound to it.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator symbol is not part of the operator catalog.
    UnknownOperator {
        /// The offending symbol.
        symbol: String,
    },
    /// Evaluation did not end with exactly one value on the stack.
    ///
    /// This is an internal invariant violation: validation should have
    /// rejected the expression before it was converted.
    MalformedPostfix {
        /// The number of values left on the stack.
        remaining: usize,
    },
}

impl RuntimeError {
    /// Whether this error signals a broken pipeline rather than bad input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self,
                 Self::UnknownOperator { .. } | Self::MalformedPostfix { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "No value bound to variable '{name}'."),
            Self::UnknownOperator { symbol } => {
                write!(f, "The operator \"{symbol}\" was not recognized.")
            },
            Self::MalformedPostfix { remaining } => write!(f,
                                                           "Malformed postfix sequence: evaluation ended with {remaining} value(s) on the stack."),
        }
    }
}

impl std::error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pipeline_failures_are_internal() {
        assert!(!RuntimeError::UnboundVariable { name: "x".to_string() }.is_internal());
        assert!(RuntimeError::UnknownOperator { symbol: "%".to_string() }.is_internal());
        assert!(RuntimeError::MalformedPostfix { remaining: 0 }.is_internal());
    }
}
