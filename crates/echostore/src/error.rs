//! Error types for echostore

use std::fmt;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for store operations
#[derive(Debug)]
pub enum Error {
    /// Operation applied to a key holding the wrong kind of value
    /// (e.g. `incr` on a list, `rpush` on a scalar)
    WrongType(String),

    /// `incr` target does not hold a base-10 integer
    NotInteger(String),

    /// Backend-specific failure (e.g. a Redis connection error)
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WrongType(key) => {
                write!(f, "Wrong value type at key '{}'", key)
            }
            Error::NotInteger(key) => {
                write!(f, "Value at key '{}' is not an integer", key)
            }
            Error::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<redis::RedisError> for Error {
    fn from(err: redis::RedisError) -> Self {
        Error::Backend(err.to_string())
    }
}
