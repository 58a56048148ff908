//! Entry point wiring the path context and declaration rewriting into a stylesheet walk.

use std::path::Path;

use crate::asset_paths::resolve_against;
use crate::config::AssetsConfig;
use crate::context::PathContext;
use crate::copier::AssetCopier;
use crate::declarations::find_declarations;
use crate::error::TransformError;
use crate::models::TransformReport;
use crate::rewriter::rewrite_declaration_value;
use crate::stylesheet::{Declaration, DeclarationWalker, ProcessOptions, Stylesheet};

/// Stylesheet transform copying `url()` assets into the configured assets directory.
#[derive(Debug, Clone, Default)]
pub struct UrlCopyTransform {
    config: AssetsConfig,
}

impl UrlCopyTransform {
    /// Create a transform for the provided configuration.
    pub fn new(config: AssetsConfig) -> Self {
        Self { config }
    }

    /// Rewrite every declaration of `stylesheet` in place.
    ///
    /// `working_dir` stands in for the process working directory: relative `from`/`to` options are
    /// resolved against it, and declarations without source metadata are treated as authored there.
    pub fn run<W: DeclarationWalker>(
        &self,
        stylesheet: &mut W,
        options: &ProcessOptions,
        working_dir: &Path,
    ) -> Result<TransformReport, TransformError> {
        let context = PathContext::resolve(options, working_dir);
        let copier = AssetCopier::new(context.assets_location(&self.config));
        tracing::debug!(
            source_dir = %context.source_dir.display(),
            dest_dir = %context.dest_dir.display(),
            copying = copier.is_enabled(),
            "rewriting stylesheet urls"
        );

        let mut report = TransformReport::default();
        stylesheet.try_each_declaration(|declaration| -> Result<(), TransformError> {
            if !declaration.value.contains("url(") {
                return Ok(());
            }

            let source_dir = match declaration.source_dir() {
                Some(dir) => resolve_against(&context.working_dir, dir),
                None => context.working_dir.clone(),
            };

            if let Some(value) =
                rewrite_declaration_value(&declaration.value, &source_dir, &copier, &mut report)?
            {
                declaration.value = value;
                report.rewritten_declarations += 1;
            }
            Ok(())
        })?;

        Ok(report)
    }

    /// Rewrite the `url()` references of a whole stylesheet source read from `options.from`.
    ///
    /// Only declaration values are visited. At-rule preludes such as `@import url(...)`,
    /// selectors and comments are copied to the output unchanged.
    pub fn rewrite_css(
        &self,
        css: &str,
        options: &ProcessOptions,
        working_dir: &Path,
    ) -> Result<(String, TransformReport), TransformError> {
        let input_file = options
            .from
            .as_ref()
            .map(|from| resolve_against(working_dir, from));
        let spans = find_declarations(css);
        let declarations = spans
            .iter()
            .map(|span| {
                let declaration = Declaration::new(span.property(css), span.value(css));
                match &input_file {
                    Some(file) => declaration.with_input_file(file),
                    None => declaration,
                }
            })
            .collect();

        let mut stylesheet = Stylesheet::new(declarations);
        let report = self.run(&mut stylesheet, options, working_dir)?;

        let mut output = String::with_capacity(css.len());
        let mut last = 0;
        for (span, declaration) in spans.iter().zip(&stylesheet.declarations) {
            output.push_str(&css[last..span.value.start]);
            output.push_str(&declaration.value);
            last = span.value.end;
        }
        output.push_str(&css[last..]);

        Ok((output, report))
    }
}
