use std::fmt;
use std::path::PathBuf;

/// Result type for eventsift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the eventsift crates
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),
    /// Input produced zero parsable records after every loader strategy
    NoRecords { path: Option<PathBuf> },
    /// SQL generation was requested for a dialect outside the fixed set
    UnsupportedDialect(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::NoRecords { path: Some(path) } => {
                write!(f, "no JSON records found in {}", path.display())
            }
            Error::NoRecords { path: None } => write!(f, "no JSON records found in payload"),
            Error::UnsupportedDialect(name) => {
                write!(f, "unsupported warehouse dialect: {}", name)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
