use std::fmt;

/// Closed set of request-layer failures, matched exhaustively by the pipeline.
///
/// The variants exist to label the diagnostic; all of them are fatal to a run.
#[derive(Debug)]
pub enum UploadError {
    Connection(String),
    Http(String),
    Timeout(String),
    Request(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Connection(msg) => write!(f, "connection error: {msg}"),
            UploadError::Http(msg) => write!(f, "http error: {msg}"),
            UploadError::Timeout(msg) => write!(f, "timeout error: {msg}"),
            UploadError::Request(msg) => write!(f, "request error: {msg}"),
        }
    }
}

impl std::error::Error for UploadError {}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            UploadError::Connection(err.to_string())
        } else if err.is_timeout() {
            UploadError::Timeout(err.to_string())
        } else if err.is_status() {
            UploadError::Http(err.to_string())
        } else {
            UploadError::Request(err.to_string())
        }
    }
}
