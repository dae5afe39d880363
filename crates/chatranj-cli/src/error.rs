//! Session command errors.

/// Errors that can occur while parsing or running session commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command that needs an argument was given none.
    #[error("{command} needs an argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// A square argument was not two digits in 0-7.
    #[error("invalid square: {value} (expected two digits 0-7, e.g. 64)")]
    InvalidSquare {
        /// The square string that failed to parse.
        value: String,
    },

    /// A move argument was not four digits in 0-7.
    #[error("invalid move: {value} (expected four digits 0-7, e.g. 6444)")]
    InvalidMove {
        /// The move string that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
