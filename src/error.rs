use thiserror::Error;

/// A `Result` specialized for cookie string parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a cookie string.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The raw string was non-blank but contained no `=` character at all.
    ///
    /// Only produced under [`ParsePolicy::Strict`](crate::ParsePolicy).
    #[error("malformed cookie string: {raw}")]
    Malformed {
        /// The offending raw input.
        raw: String,
    },
}
