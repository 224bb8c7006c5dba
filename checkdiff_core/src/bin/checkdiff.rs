use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use checkdiff_core::{
    config::DiffConfig,
    renderers::{RenderOptions, RenderService},
    CollapseState, DiffEngine,
};
use clap::Parser;

/// Compare two text files line by line, highlighting changed characters.
///
/// Exits with 0 when the documents match, 1 when they differ and 2 on error.
#[derive(Debug, Parser)]
#[command(name = "checkdiff", version)]
struct Cli {
    /// Old document, shown on the left.
    #[arg(required_unless_present = "list_formats")]
    left: Option<Utf8PathBuf>,
    /// New document, shown on the right.
    #[arg(required_unless_present = "list_formats")]
    right: Option<Utf8PathBuf>,
    /// Output format (see --list-formats).
    #[arg(long, short)]
    format: Option<String>,
    /// Collapse runs of unchanged lines into summary rows.
    #[arg(long)]
    collapse_unchanged: bool,
    /// TOML configuration file.
    #[arg(long, env = "CHECKDIFF_CONFIG")]
    config: Option<Utf8PathBuf>,
    /// Reject documents larger than this many bytes.
    #[arg(long)]
    max_bytes: Option<u64>,
    /// Total output width for the split format.
    #[arg(long)]
    width: Option<usize>,
    /// List available output formats and exit.
    #[arg(long)]
    list_formats: bool,
}

impl Cli {
    fn config(&self) -> Result<DiffConfig> {
        let mut config = match &self.config {
            Some(path) => DiffConfig::load(path)?,
            None => DiffConfig::default(),
        };

        if let Some(format) = &self.format {
            config.format.clone_from(format);
        }
        if self.collapse_unchanged {
            config.collapse_unchanged = true;
        }
        if let Some(max_bytes) = self.max_bytes {
            config.max_input_bytes = max_bytes;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(&Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("checkdiff: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let service = RenderService::default();
    if cli.list_formats {
        for summary in service.summaries() {
            println!("{:<8} {}", summary.id, summary.label);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let (Some(left), Some(right)) = (&cli.left, &cli.right) else {
        bail!("two documents are required");
    };
    let config = cli.config()?;
    log::debug!("effective configuration: {config:?}");

    let left_text = read_document(left)?;
    let right_text = read_document(right)?;
    let view = DiffEngine::with_limit(config.max_input_bytes).diff(&left_text, &right_text)?;

    let collapse = if config.collapse_unchanged {
        CollapseState::collapse_eligible(&view)
    } else {
        CollapseState::new()
    };
    let output = service.render(
        &config.format,
        &view,
        &collapse,
        &RenderOptions::with_width(config.width),
    )?;
    print!("{output}");

    Ok(if view.is_identical() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn read_document(path: &Utf8Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}
