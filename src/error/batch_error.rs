use crate::error::RuntimeError;

#[derive(Debug)]
/// Represents the failures that abort a whole batch run.
pub enum BatchError {
    /// The input file could not be read.
    Input {
        /// The path that was being read.
        path:   String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// The output file or the console report could not be written.
    Output {
        /// The path or stream that was being written.
        target: String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// Evaluation hit an internal invariant violation.
    Internal {
        /// The expression being processed.
        line:   String,
        /// The runtime error that was raised.
        source: RuntimeError,
    },
}

impl BatchError {
    /// The process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } | Self::Output { .. } => 2,
            Self::Internal { .. } => 3,
        }
    }
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input { path, source } => {
                write!(f, "Failed to read the input file '{path}': {source}")
            },
            Self::Output { target, source } => {
                write!(f, "Failed to write to '{target}': {source}")
            },
            Self::Internal { line, source } => {
                write!(f, "Internal error while processing '{line}': {source}")
            },
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input { source, .. } | Self::Output { source, .. } => Some(source),
            Self::Internal { source, .. } => Some(source),
        }
    }
}
