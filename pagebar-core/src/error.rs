use std::fmt;

#[derive(Debug)]
pub enum PaginationError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidOption(String),
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::Io(e) => write!(f, "IO error: {}", e),
            PaginationError::Json(e) => write!(f, "JSON parsing error: {}", e),
            PaginationError::InvalidOption(e) => write!(f, "Invalid option: {}", e),
        }
    }
}

impl std::error::Error for PaginationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaginationError::Io(e) => Some(e),
            PaginationError::Json(e) => Some(e),
            PaginationError::InvalidOption(_) => None,
        }
    }
}

impl From<serde_json::Error> for PaginationError {
    fn from(err: serde_json::Error) -> Self {
        PaginationError::Json(err)
    }
}

impl From<std::io::Error> for PaginationError {
    fn from(err: std::io::Error) -> Self {
        PaginationError::Io(err)
    }
}
