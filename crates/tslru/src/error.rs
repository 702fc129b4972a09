//! Error types for tslru

use std::fmt;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Capacity must be at least 1
    InvalidCapacity(usize),

    /// Key is not present in the cache
    KeyNotFound,
}

impl Error {
    /// True for the ordinary "key absent" outcome of a lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid capacity: {} (must be greater than zero)", cap)
            }
            Error::KeyNotFound => write!(f, "Key not found"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidCapacity(0).to_string(),
            "Invalid capacity: 0 (must be greater than zero)"
        );
        assert_eq!(Error::KeyNotFound.to_string(), "Key not found");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::KeyNotFound.is_not_found());
        assert!(!Error::InvalidCapacity(0).is_not_found());
    }
}
