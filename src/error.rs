use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    /// The target file name is empty.
    InvalidArgument(String),
    Io(io::Error),
    InvalidUrl(String),
    UnexpectedJson(serde_json::Error),
    Cancelled,
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::UnexpectedJson(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Error::Io(error) => write!(f, "{error}"),
            Error::InvalidUrl(url) => write!(f, "'{url}' is not a valid file url"),
            Error::UnexpectedJson(error) => write!(f, "unexpected json: {error}"),
            Error::Cancelled => write!(f, "search cancelled"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            Error::UnexpectedJson(error) => Some(error),
            _ => None,
        }
    }
}
