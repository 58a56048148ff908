//! Data structures produced while relocating stylesheet assets.

use std::path::PathBuf;

/// Outcome of processing one local `url()` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// The reference keeps its original value.
    Unchanged,
    /// The asset was relocated and should be referenced through the contained path.
    Relocated(String),
}

/// Non-fatal problem encountered while processing a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWarning {
    /// File the reference resolved to.
    pub path: PathBuf,
    /// Human readable description of the failure.
    pub reason: String,
}

impl std::fmt::Display for AssetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "can't read file `{}`, ignoring", self.path.display())
    }
}

/// Asset relocated into the assets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAsset {
    /// File the asset was read from.
    pub source: PathBuf,
    /// File the asset lives at in the assets directory.
    pub destination: PathBuf,
    /// Value written into the rewritten `url()`.
    pub reference: String,
    /// `false` when the destination already existed and was left untouched.
    pub written: bool,
}

/// Summary of a transform run returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Warnings raised for references that could not be relocated.
    pub warnings: Vec<AssetWarning>,
    /// Every relocated reference, in processing order.
    pub copied: Vec<CopiedAsset>,
    /// Number of declarations whose value was rewritten.
    pub rewritten_declarations: usize,
}

impl TransformReport {
    /// Returns `true` when no warnings were raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of files actually written during the run.
    pub fn files_written(&self) -> usize {
        self.copied.iter().filter(|asset| asset.written).count()
    }
}
