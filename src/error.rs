//! Error enum
use std::fmt;

use crate::segment::LengthMismatch;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// A document has no extractable fragment.
    EmptyStructure,
    /// A title has translations but no root-language record (holds the title).
    MissingRootText(String),
    /// Root and translation segmentations differ in length (strict mode only).
    LengthMismatch(LengthMismatch),
    UnknownLang(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {}", e),
            Error::EmptyStructure => write!(f, "document has no extractable fragments"),
            Error::MissingRootText(title) => write!(f, "no root text found for {:?}", title),
            Error::LengthMismatch(m) => write!(f, "{}", m),
            Error::UnknownLang(code) => write!(f, "unknown language code {:?}", code),
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

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Error {
        Error::Io(e.error)
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

impl From<LengthMismatch> for Error {
    fn from(m: LengthMismatch) -> Error {
        Error::LengthMismatch(m)
    }
}
