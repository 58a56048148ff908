#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod context;
pub mod copier;
pub mod declarations;
pub mod error;
pub mod functions;
pub mod models;
pub mod rewriter;
pub mod stylesheet;
mod syntax;
pub mod token;
pub mod transform;

pub use config::AssetsConfig;
pub use context::{AssetsLocation, PathContext};
pub use declarations::{DeclarationSpan, find_declarations};
pub use error::{ConfigError, TransformError};
pub use models::{AssetWarning, CopiedAsset, CopyResult, TransformReport};
pub use stylesheet::{Declaration, DeclarationSource, DeclarationWalker};
pub use stylesheet::{ProcessOptions, Stylesheet};
pub use token::{Quote, UrlToken};
pub use transform::UrlCopyTransform;
