//! Application error types.

use thiserror::Error;

/// Errors surfaced while loading console configuration.
///
/// The navigation and guarding operations themselves are total; only the
/// configuration load path can fail.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON in console configuration")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML in console configuration")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("navigation entry with an empty name")]
    EmptyName,

    #[error("navigation entry {0:?} has an empty path")]
    EmptyPath(String),

    #[error("duplicate sibling name {0:?} in navigation configuration")]
    DuplicateSibling(String),

    #[error("route pattern {0:?} has segments after a wildcard")]
    SegmentsAfterWildcard(String),

    #[error("wildcard route {0:?} cannot have children")]
    WildcardWithChildren(String),
}

/// Result type alias using ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
