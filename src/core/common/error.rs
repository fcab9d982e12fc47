use std::fmt;

use crate::core::indexing::kdtree::KdTreeError;

/// Crate-level error type.
///
/// Index operations report the narrower `KdTreeError`; this type wraps it
/// together with the configuration and I/O failures that surround an index.
#[derive(Debug)]
pub enum OxikdError {
    Io(std::io::Error),
    Configuration(String),
    KdTree(KdTreeError),
}

impl fmt::Display for OxikdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO Error: {}", e),
            Self::Configuration(s) => write!(f, "Configuration error: {}", s),
            Self::KdTree(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for OxikdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::KdTree(e) => Some(e),
            Self::Configuration(_) => None,
        }
    }
}

// Manual From implementations
impl From<std::io::Error> for OxikdError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<KdTreeError> for OxikdError {
    fn from(err: KdTreeError) -> Self {
        Self::KdTree(err)
    }
}
