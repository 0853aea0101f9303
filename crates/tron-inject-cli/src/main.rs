//! # tron-inject
//!
//! Command-line front end for [`tron_inject`]: runs the injector over files on
//! disk, writing results to stdout or an output directory.

#![deny(unsafe_code)]

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tron_inject::loader::{load_options, load_options_from_path};
use tron_inject::{DirectiveScope, Document, InjectConfig, InjectOptions, Injector};

/// Inject file and variable content into documents.
#[derive(Parser, Debug)]
#[command(name = "tron-inject", about = "Inject file and variable content into documents")]
struct Cli {
    /// Documents to process (`-` reads stdin).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON config file (defaults to `./tron-inject.json` when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding injectable files.
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Placeholder syntax: `any-time`, `pre` or `post`.
    #[arg(long)]
    scope: Option<String>,

    /// Match filenames exactly, extension included.
    #[arg(long)]
    exact: Option<bool>,

    /// Re-read files for every placeholder instead of caching.
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Variable replacement (repeatable).
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// Write results into this directory instead of stdout.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Minimum log level (overridden by `RUST_LOG`).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Options given on the command line, layered over the config file.
    fn options(&self) -> InjectOptions {
        let mut options = InjectOptions {
            directory: self.directory.clone(),
            scope: self.scope.as_deref().map(DirectiveScope::from_name),
            exact_match: self.exact,
            cache_enabled: self.no_cache.then_some(false),
            ..InjectOptions::default()
        };
        for (key, value) in &self.vars {
            options = options.with_replacement(key.clone(), value.clone());
        }
        options
    }
}

/// Parse a `KEY=VALUE` pair. The value may be empty or contain `=`.
fn parse_var(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty variable name in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = subscriber.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(&cli.log_level);

    let file_options = match &cli.config {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            load_options_from_path(path)
        }
        None => load_options(),
    }
    .context("failed to load inject config")?;

    let config = InjectConfig::from_options(file_options.overlay(cli.options()))
        .context("failed to resolve inject config")?;
    debug!(
        directory = %config.directory().display(),
        scope = %config.scope(),
        exact = config.exact_match(),
        cache = config.cache_enabled(),
        "injector configured"
    );
    let mut injector = Injector::with_config(config);

    if let Some(dir) = &cli.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output dir: {}", dir.display()))?;
    }

    for input in &cli.inputs {
        let document = read_document(input)?;
        let output = injector
            .transform(document)
            .with_context(|| format!("failed to process {}", input.display()))?;
        write_document(&output, cli.out_dir.as_deref())?;
    }

    let stats = injector.engine().stats();
    info!(
        file_reads = stats.file_reads,
        cache_hits = stats.cache_hits,
        missing_files = stats.missing_files,
        missing_variables = stats.missing_variables,
        "injection complete"
    );
    Ok(())
}

fn read_document(input: &Path) -> Result<Document> {
    if input == Path::new("-") {
        let mut text = String::new();
        let _ = std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(Document::buffer(input, text));
    }
    if input.is_dir() {
        return Ok(Document::null(input));
    }
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    Ok(Document::buffer(input, text))
}

fn write_document(document: &Document, out_dir: Option<&Path>) -> Result<()> {
    let Some(text) = document.text() else {
        debug!(path = %document.path.display(), "skipping document without contents");
        return Ok(());
    };

    match (out_dir, document.path.file_name()) {
        (Some(dir), Some(name)) => {
            let target = dir.join(name);
            std::fs::write(&target, text)
                .with_context(|| format!("failed to write {}", target.display()))?;
            println!("{}", target.display());
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}
