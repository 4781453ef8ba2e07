use std::fmt;
use std::path::PathBuf;

/// Failure modes for loading an alias configuration file.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "alias file not found: {}", path.display())
            }
            ConfigError::Io { path, source } => {
                write!(f, "could not read alias file {}: {}", path.display(), source)
            }
            ConfigError::Malformed { path, source } => {
                write!(f, "malformed alias file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NotFound { .. } => None,
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Malformed { source, .. } => Some(source),
        }
    }
}
