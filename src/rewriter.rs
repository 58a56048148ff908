//! Rewrites every `url()` occurrence inside a declaration value.

use std::path::Path;
use std::sync::OnceLock;

use crate::asset_paths::is_pass_through;
use crate::copier::AssetCopier;
use crate::error::TransformError;
use crate::functions::FunctionCallScanner;
use crate::models::{CopyResult, TransformReport};
use crate::token::UrlToken;

fn url_scanner() -> &'static FunctionCallScanner {
    static SCANNER: OnceLock<FunctionCallScanner> = OnceLock::new();
    SCANNER.get_or_init(|| FunctionCallScanner::new("url"))
}

/// Rewrite the `url()` references of a declaration value authored in `source_dir`.
///
/// Returns `None` when the value is left as is. Occurrences are handled left to right and only
/// the matched `url(...)` spans are replaced; surrounding text is preserved exactly.
pub fn rewrite_declaration_value(
    value: &str,
    source_dir: &Path,
    copier: &AssetCopier,
    report: &mut TransformReport,
) -> Result<Option<String>, TransformError> {
    if !value.contains("url(") {
        return Ok(None);
    }

    let rewrite = |argument: &str| rewrite_url(argument, source_dir, copier, report);
    let rewritten = url_scanner().try_replace_all(value, rewrite)?;

    Ok((rewritten != value).then_some(rewritten))
}

fn rewrite_url(
    argument: &str,
    source_dir: &Path,
    copier: &AssetCopier,
    report: &mut TransformReport,
) -> Result<String, TransformError> {
    let token = UrlToken::parse(argument);
    if is_pass_through(&token.value) {
        return Ok(token.to_css());
    }

    match copier.copy(source_dir, &token, report)? {
        CopyResult::Unchanged => Ok(token.to_css()),
        CopyResult::Relocated(reference) => Ok(token.with_value(reference).to_css()),
    }
}
