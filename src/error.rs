//! Error types surfaced by configuration loading and the transform.

use std::path::PathBuf;

/// Errors that can occur while loading the assets configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration file.
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Failures that abort a transform run.
///
/// Unreadable source assets are not errors; they are reported as warnings and the reference is
/// left untouched. Only a destination that cannot be written stops the run, since continuing
/// would leave the stylesheet pointing at files that were never created.
#[derive(Debug)]
pub enum TransformError {
    /// Failed to create the assets directory.
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to write a copied asset.
    Write {
        /// Destination file that could not be written.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "failed to create {}: {}", path.display(), source)
            }
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}
