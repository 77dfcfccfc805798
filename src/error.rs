use thiserror::Error;

/// SQL constructs the interpolation scanner can be left inside of at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// A `'...'` string literal
    SingleQuoted,
    /// A `"..."` quoted identifier
    DoubleQuoted,
    /// A `/* ... */` comment
    BlockComment,
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Construct::SingleQuoted => "single-quoted literal",
            Construct::DoubleQuoted => "double-quoted identifier",
            Construct::BlockComment => "block comment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum SqlInterpolateError {
    #[error("Bind parameter mismatch: query has {expected} placeholder(s) but {actual} value(s) were supplied")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Unterminated {construct} starting at byte {offset}")]
    UnterminatedConstruct { construct: Construct, offset: usize },

    #[error("Cannot decode {input:?} as {target}")]
    DecodeError { target: &'static str, input: String },

    #[error("Unregistered driver {0:?}")]
    UnregisteredDriver(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    #[error("Unimplemented feature: {0}")]
    Unimplemented(String),

    #[error("Other database error: {0}")]
    Other(String),
}

impl SqlInterpolateError {
    pub(crate) fn decode(target: &'static str, input: &str) -> Self {
        SqlInterpolateError::DecodeError {
            target,
            input: input.to_string(),
        }
    }
}

impl From<url::ParseError> for SqlInterpolateError {
    fn from(err: url::ParseError) -> Self {
        SqlInterpolateError::ConfigError(format!("Invalid connection URI: {err}"))
    }
}
