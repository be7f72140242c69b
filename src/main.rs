use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use fontswap::cli::{self, CliResult, RuntimeOptions};
use fontswap::config::Config;
use fontswap_document::Document;
use fontswap_fonts::SystemFonts;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let result = cli::process_cli();
    let options = match &result {
        CliResult::Session(options) | CliResult::Scan(options) | CliResult::Fonts(options) => {
            options.clone()
        }
    };

    let config_path = options
        .config
        .clone()
        .unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    fontswap::debug::init_log_bridge(options.log_level, config.level_filter());
    log::info!("Starting fontswap");

    // Create the Tokio runtime for the session loop and font-source calls.
    let runtime = Runtime::new()?;
    runtime.block_on(async {
        match result {
            CliResult::Fonts(_) => run_fonts(&config).await,
            CliResult::Scan(_) => run_scan(&options, &config),
            CliResult::Session(_) => run_session(&options, &config).await,
        }
    })
}

fn document_path(options: &RuntimeOptions, config: &Config) -> Result<PathBuf> {
    options
        .document
        .clone()
        .or_else(|| config.document.clone())
        .context("no document given; pass --document or set `document` in config.yaml")
}

fn load_document(options: &RuntimeOptions, config: &Config) -> Result<(PathBuf, Document)> {
    let path = document_path(options, config)?;
    let doc = Document::load(&path)
        .with_context(|| format!("failed to load document {}", path.display()))?;
    Ok((path, doc))
}

/// `fontswap fonts`: print the full catalog as JSON and exit.
async fn run_fonts(config: &Config) -> Result<()> {
    let fonts = SystemFonts::new(config.system_fonts, &config.font_dirs);
    let catalog = fontswap::catalog::fetch_catalog(&fonts).await?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

/// `fontswap scan`: print the document's font inventory as JSON and exit.
fn run_scan(options: &RuntimeOptions, config: &Config) -> Result<()> {
    let (_, doc) = load_document(options, config)?;
    let groups = fontswap::scan::collect_fonts(&doc, &doc.active_paths());
    println!("{}", serde_json::to_string_pretty(&groups)?);
    Ok(())
}

/// Default mode: run the interactive stdio session.
async fn run_session(options: &RuntimeOptions, config: &Config) -> Result<()> {
    let (path, doc) = load_document(options, config)?;
    let fonts = SystemFonts::new(config.system_fonts, &config.font_dirs);
    let write_back = (options.write || config.write_back).then(|| path.clone());
    fontswap::app::run(doc, fonts, write_back).await
}
