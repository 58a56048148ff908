use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use css_asset_copier::{AssetsConfig, ProcessOptions, UrlCopyTransform};
use tracing_subscriber::EnvFilter;

/// Copy assets referenced by `url()` in a stylesheet and rewrite the references.
#[derive(Debug, Parser)]
#[command(name = "css-asset-copier", version, long_about = None)]
struct Cli {
    /// Stylesheet to process.
    input: PathBuf,

    /// Destination stylesheet. The result is printed to stdout when omitted.
    #[arg(long, short)]
    to: Option<PathBuf>,

    /// Directory receiving copied assets.
    #[arg(long)]
    assets_path: Option<PathBuf>,

    /// Resolve the assets path relative to the destination stylesheet directory.
    #[arg(long)]
    relative: bool,

    /// JSON configuration file. Defaults to `css-assets.config.json` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every relocated asset.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("css-asset-copier error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir()
        .context("failed to determine working directory")?;

    let mut config = match &cli.config {
        Some(path) => AssetsConfig::from_path(path)?,
        None => AssetsConfig::discover(&working_dir),
    };
    if let Some(assets_path) = cli.assets_path {
        config.assets_path = Some(assets_path);
    }
    if cli.relative {
        config.relative = true;
    }
    if !config.is_enabled() {
        tracing::info!("no assets path configured, references are left unchanged");
    }

    let css = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let options = ProcessOptions {
        from: Some(cli.input.clone()),
        to: cli.to.clone(),
    };

    let (output, report) = UrlCopyTransform::new(config)
        .rewrite_css(&css, &options, &working_dir)
        .with_context(|| format!("failed to process {}", cli.input.display()))?;

    match &cli.to {
        Some(to) => {
            if let Some(parent) = to.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(to, &output)
                .with_context(|| format!("failed to write {}", to.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write stylesheet to stdout")?;
        }
    }

    tracing::info!(
        copied = report.files_written(),
        references = report.copied.len(),
        warnings = report.warnings.len(),
        "processed {}",
        cli.input.display()
    );

    Ok(())
}
