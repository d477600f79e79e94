//! Command-line interface for write-probin
//!
//! Loads the parameter files, expands the template, and writes `probin.f90`
//! into the working directory. This is the only place that prints
//! diagnostics and picks an exit status.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;
use crate::error::{GenError, EXIT_USAGE};
use crate::params::{load_parameter_files, ParameterSet};
use crate::template::{expand_file, Expansion, OUTPUT_FILE};

/// Generate probin.f90 from runtime parameter files and a template
#[derive(Parser, Debug)]
#[command(name = "write-probin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template containing @@keyword@@ markers
    #[arg(short = 't', long = "template", value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Parameter definition files, later files override earlier ones
    #[arg(value_name = "PARAM_FILE", required = true)]
    pub param_files: Vec<PathBuf>,

    /// Generator settings file (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match generate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn generate(cli: &Cli) -> Result<()> {
    let work_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let settings = load_config(&work_dir, cli.config.as_deref())?;

    let params = load_parameter_files(&cli.param_files)?;
    warn_overrides(&params);

    let expansion = expand_file(&cli.template, params.records(), &settings)?;
    warn_skipped(&expansion);

    write_output(&work_dir.join(OUTPUT_FILE), &expansion.text)?;
    tracing::debug!(
        "Wrote {} ({} parameters from {} files)",
        OUTPUT_FILE,
        params.len(),
        cli.param_files.len()
    );
    Ok(())
}

fn warn_overrides(params: &ParameterSet) {
    for o in params.overrides() {
        println!("WARNING: parameter {} already defined.  Using new values.", o.name);
    }
}

fn warn_skipped(expansion: &Expansion) {
    for name in &expansion.skipped {
        println!("invalid datatype for variable {}", name);
    }
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed writing {}", path.display()))
}

fn report_error(err: &anyhow::Error) {
    if let Some(GenError::MalformedLine { line, .. }) = err.downcast_ref::<GenError>() {
        eprintln!("{}", line);
    }
    eprintln!("ERROR: {:#}", err);
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GenError>().map_or(EXIT_USAGE, GenError::exit_code)
}
