//! Directories derived once per stylesheet from the pipeline options and configuration.

use std::path::{Path, PathBuf};

use crate::asset_paths::{relative_path, resolve_against};
use crate::config::AssetsConfig;
use crate::stylesheet::ProcessOptions;

/// Source and destination directories for one transform run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    /// Directory of the source stylesheet, `.` when unknown.
    pub source_dir: PathBuf,
    /// Directory of the destination stylesheet, falling back to `source_dir`.
    pub dest_dir: PathBuf,
    /// Base for relative paths and directory of declarations lacking source metadata.
    pub working_dir: PathBuf,
}

/// Assets directory expressed both on disk and relative to the destination stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetsLocation {
    /// Absolute directory copied assets are written to.
    pub absolute: PathBuf,
    /// Directory prefix used in rewritten references.
    pub relative: PathBuf,
}

impl PathContext {
    /// Derive the run's directories from the `from`/`to` options.
    pub fn resolve(options: &ProcessOptions, working_dir: impl Into<PathBuf>) -> Self {
        let source_dir = options
            .from
            .as_deref()
            .map(parent_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let dest_dir = options
            .to
            .as_deref()
            .map(parent_dir)
            .unwrap_or_else(|| source_dir.clone());

        Self {
            source_dir,
            dest_dir,
            working_dir: working_dir.into(),
        }
    }

    /// Destination directory resolved against the working directory.
    pub fn absolute_dest_dir(&self) -> PathBuf {
        resolve_against(&self.working_dir, &self.dest_dir)
    }

    /// Resolve the configured assets directory, or `None` when copying is disabled.
    pub fn assets_location(&self, config: &AssetsConfig) -> Option<AssetsLocation> {
        let assets_path = config.assets_path.as_deref()?;
        let dest_dir = self.absolute_dest_dir();

        let location = if config.relative {
            AssetsLocation {
                absolute: resolve_against(&dest_dir, assets_path),
                relative: assets_path.to_path_buf(),
            }
        } else {
            let absolute = resolve_against(&self.working_dir, assets_path);
            AssetsLocation {
                relative: relative_path(&dest_dir, &absolute),
                absolute,
            }
        };

        Some(location)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None if path.has_root() => path.to_path_buf(),
        None => PathBuf::from("."),
    }
}
