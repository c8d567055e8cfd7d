//! Error types for echocache

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug)]
pub enum Error {
    /// Failure from the backing store
    Store(echostore::Error),

    /// The facade has no bound backing store
    NotConnected,

    /// Stored bytes are not valid UTF-8
    Utf8(FromUtf8Error),

    /// Stored value is not a base-10 integer
    NotInteger(String),

    /// I/O error while writing a replay report
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(e) => write!(f, "Store error: {}", e),
            Error::NotConnected => write!(f, "No backing store is connected"),
            Error::Utf8(e) => write!(f, "Value is not valid UTF-8: {}", e),
            Error::NotInteger(key) => {
                write!(f, "Value at key '{}' is not an integer", key)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(e) => Some(e),
            Error::Utf8(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<echostore::Error> for Error {
    fn from(err: echostore::Error) -> Self {
        Error::Store(err)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Error::Utf8(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
