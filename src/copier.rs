//! Copies local assets referenced by `url()` into the configured assets directory.

use std::fs;
use std::path::Path;

use crate::asset_paths::{make_url_reference, resolve_against, split_query_and_fragment};
use crate::context::AssetsLocation;
use crate::error::TransformError;
use crate::models::{AssetWarning, CopiedAsset, CopyResult, TransformReport};
use crate::token::UrlToken;

/// Relocates local assets for a single transform run.
#[derive(Debug, Clone)]
pub struct AssetCopier {
    location: Option<AssetsLocation>,
}

impl AssetCopier {
    /// Create a copier writing into `location`; `None` disables copying entirely.
    pub fn new(location: Option<AssetsLocation>) -> Self {
        Self { location }
    }

    /// Whether the copier will touch the filesystem at all.
    pub fn is_enabled(&self) -> bool {
        self.location.is_some()
    }

    /// Copy the asset referenced by `token`, resolved from `source_dir`, and return its new
    /// reference.
    ///
    /// Unreadable sources are recorded as warnings in `report` and leave the reference unchanged.
    /// An existing destination file is never overwritten. Failing to create the assets directory
    /// or to write the copy is returned as an error.
    pub fn copy(
        &self,
        source_dir: &Path,
        token: &UrlToken,
        report: &mut TransformReport,
    ) -> Result<CopyResult, TransformError> {
        let Some(location) = &self.location else {
            return Ok(CopyResult::Unchanged);
        };

        let (file_path, query) = split_query_and_fragment(&token.value);
        let source = resolve_against(source_dir, Path::new(file_path));

        let contents = match fs::read(&source) {
            Ok(contents) => contents,
            Err(err) => {
                let warning = AssetWarning {
                    path: source,
                    reason: err.to_string(),
                };
                tracing::warn!(reason = %warning.reason, "{warning}");
                report.warnings.push(warning);
                return Ok(CopyResult::Unchanged);
            }
        };

        let Some(file_name) = source.file_name() else {
            return Ok(CopyResult::Unchanged);
        };

        fs::create_dir_all(&location.absolute).map_err(|source| TransformError::CreateDir {
            path: location.absolute.clone(),
            source,
        })?;

        let destination = location.absolute.join(file_name);
        let written = write_if_absent(&destination, &contents)?;
        let path = make_url_reference(&location.relative, &file_name.to_string_lossy());
        let reference = format!("{path}{query}");

        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            written,
            "relocated asset to {reference}"
        );

        report.copied.push(CopiedAsset {
            source,
            destination,
            reference: reference.clone(),
            written,
        });

        Ok(CopyResult::Relocated(reference))
    }
}

/// Write `contents` unless something already exists at `destination`.
///
/// The existence check and the write are not atomic; concurrent runs sharing an assets directory
/// may both write the same file.
fn write_if_absent(destination: &Path, contents: &[u8]) -> Result<bool, TransformError> {
    if destination.exists() {
        return Ok(false);
    }

    fs::write(destination, contents).map_err(|source| TransformError::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    Ok(true)
}
