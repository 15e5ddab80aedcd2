//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// A CSS selector used to walk diff markup could not be compiled.
    Selector(String),
    Tokenizer(String),
    /// A logic defect (as opposed to bad input data). Aborts a pipeline run.
    Invariant(String),
    Custom(String),
}

impl Error {
    /// Returns `true` if the error must stop processing altogether
    /// rather than only discarding the current revision.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Invariant(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {}", e),
            Error::Selector(s) => write!(f, "invalid selector: {}", s),
            Error::Tokenizer(s) => write!(f, "tokenizer error: {}", s),
            Error::Invariant(s) => write!(f, "invariant violated: {}", s),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

#[cfg(feature = "hf-tokenizer")]
impl From<tokenizers::Error> for Error {
    fn from(e: tokenizers::Error) -> Error {
        Error::Tokenizer(e.to_string())
    }
}
