use reqwest::StatusCode;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// Transport level failure: dns, refused connection, timeout.
    Request(reqwest::Error),
    /// The server answered with a non-success status.
    Http(StatusCode),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "Request error: {e}"),
            Self::Http(status) => write!(f, "HTTP error: {status}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            Self::Http(_) => None,
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
