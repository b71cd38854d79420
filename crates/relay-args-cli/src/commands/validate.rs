use crate::report;
use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use relay_args_project::{find_config, load_config, DocumentLoader};
use std::path::PathBuf;
use std::process;

pub fn run(config_path: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            find_config(&cwd).context(
                "No config file found. Create a .relayargsrc.yml with a `documents` pattern \
                 or pass --config",
            )?
        }
    };

    let base_dir = config_path
        .parent()
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let documents = DocumentLoader::new(&config.documents)
        .with_base_path(&base_dir)
        .load()
        .context("Failed to load documents")?;

    tracing::debug!(
        count = documents.len(),
        base_dir = %base_dir.display(),
        "loaded documents"
    );

    if documents.is_empty() {
        anyhow::bail!(
            "No documents matched the configured patterns under {}",
            base_dir.display()
        );
    }

    if matches!(format, OutputFormat::Human) {
        println!(
            "{}",
            format!("✓ Loaded {} document(s)", documents.len()).green()
        );
    }

    let validation_report = relay_args_project::run_validation(&config.validate, &documents);

    match format {
        OutputFormat::Human => print!("{}", report::render_human(&validation_report)),
        OutputFormat::Json => println!("{}", report::render_json(&validation_report)?),
    }

    // One or more error issues means the whole run failed; the report above
    // is the complete diagnostic, so no extra message is needed
    if validation_report.has_errors() {
        process::exit(1);
    }

    Ok(())
}
