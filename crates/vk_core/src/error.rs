use std::path::PathBuf;

/// An IO error with the path it happened at attached.
///
/// A bare `std::io::Error` tells you *what* went wrong but not *where*;
/// every file operation in this workspace goes through [`IntoIoError::path`]
/// so the user sees both.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("at path {path:?}, error {error}")]
    Io { error: String, path: PathBuf },

    #[error("couldn't find the user data directory")]
    DataDirNotFound,
}

pub trait IntoIoError<T> {
    /// Attach a file path to an IO result.
    fn path(self, path: impl Into<PathBuf>) -> Result<T, IoError>;
}

impl<T> IntoIoError<T> for Result<T, std::io::Error> {
    fn path(self, path: impl Into<PathBuf>) -> Result<T, IoError> {
        self.map_err(|error| IoError::Io {
            error: error.to_string(),
            path: path.into(),
        })
    }
}

/// A JSON parsing/serialization error.
///
/// Parse errors keep the offending text so corruption can
/// actually be diagnosed from a log.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("error parsing JSON: {error}\njson: {json}")]
    From { error: String, json: String },

    #[error("error serializing JSON: {error}")]
    To { error: String },
}

pub trait IntoJsonError<T> {
    /// Convert a parse error, keeping the text that failed to parse.
    fn json(self, json: String) -> Result<T, JsonError>;
    /// Convert a serialization error.
    fn json_to(self) -> Result<T, JsonError>;
}

impl<T> IntoJsonError<T> for Result<T, serde_json::Error> {
    fn json(self, json: String) -> Result<T, JsonError> {
        self.map_err(|error| JsonError::From {
            error: error.to_string(),
            json,
        })
    }

    fn json_to(self) -> Result<T, JsonError> {
        self.map_err(|error| JsonError::To {
            error: error.to_string(),
        })
    }
}
