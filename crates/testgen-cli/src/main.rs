//! testgen CLI
//!
//! Generates `EXPORT_TEST` headers and the `main.c` test runner entry point
//! for the ECC test suite.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use testgen_codegen::Generator;
use testgen_core::{Config, Error, IdMap, MacroDefinition};
use testgen_scan::{CommandPreprocessor, Preprocessor};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const BIN_NAME: &str = "testgen";

#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(author, version, about = "Test harness generator", long_about = None)]
struct Cli {
    /// Source files to scan for tests
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Preprocessor command (default: cpp)
    #[arg(long, value_name = "CMD")]
    cpp: Option<String>,

    /// Add an include path for the preprocessor
    #[arg(short = 'I', value_name = "DIR")]
    include: Vec<PathBuf>,

    /// Define a macro for the preprocessor
    #[arg(short = 'D', value_name = "NAME[=VALUE]")]
    define: Vec<MacroDefinition>,

    /// Undefine a macro for the preprocessor
    #[arg(short = 'U', value_name = "NAME")]
    undefine: Vec<String>,

    /// Show the files that would be written without writing them
    #[arg(long)]
    dry_run: bool,

    /// Print the discovered tests instead of generating files
    #[arg(long, conflicts_with = "dry_run")]
    list: bool,

    /// Output format for --list (text, json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Exit with status 1 when a source cannot be preprocessed
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Outcome of a run, mapped onto the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = io::stdout().lock();
    let status = run(
        &cli,
        |config| CommandPreprocessor::from_config(&config.preprocessor),
        &mut stdout,
    )?;

    Ok(status.into())
}

/// Execute `cli`, writing usage, diagnostics and listings to `out`
fn run<P, F, W>(cli: &Cli, make_preprocessor: F, out: &mut W) -> Result<Status>
where
    P: Preprocessor,
    F: FnOnce(&Config) -> P,
    W: Write,
{
    if cli.files.is_empty() {
        writeln!(out, "usage: {} [source files...]", BIN_NAME)?;
        return Ok(Status::Success);
    }

    let config = load_config(cli)?;
    debug!("Using config: {:?}", config);

    let preprocessor = make_preprocessor(&config);
    let generator = Generator::new(config, preprocessor)?;

    if cli.list || cli.dry_run {
        let map = match generator.scan(&cli.files) {
            Ok(map) => map,
            Err(Error::Preprocess { path }) => return could_not_find(out, &path, cli.strict),
            Err(e) => return Err(e.into()),
        };

        if cli.list {
            cmd_list(&map, &cli.format, out)?;
        } else {
            for file in generator.plan(&map) {
                writeln!(out, "would write {} ({} bytes)", file.path.display(), file.contents.len())?;
            }
        }
        return Ok(Status::Success);
    }

    match generator.run(&cli.files) {
        Ok(report) => {
            debug!("Wrote {:?}", report.written);
            Ok(Status::Success)
        }
        Err(Error::Preprocess { path }) => could_not_find(out, &path, cli.strict),
        Err(e) => Err(e).context("failed to generate test harness"),
    }
}

/// Report a source the preprocessor could not expand.
///
/// Build scripts rely on a zero status here unless --strict is given.
fn could_not_find<W: Write>(out: &mut W, path: &Path, strict: bool) -> Result<Status> {
    writeln!(out, "{}: error: could not find {}", BIN_NAME, path.display())?;
    Ok(if strict { Status::Failure } else { Status::Success })
}

/// Logs go to stderr; stdout carries usage, diagnostics and listings.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file (if any) with command-line overrides applied
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_yaml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let pre = &mut config.preprocessor;
    if let Some(cpp) = &cli.cpp {
        pre.command = cpp.clone();
    }
    pre.include_paths.extend(cli.include.iter().cloned());
    pre.defines.extend(cli.define.iter().cloned());
    pre.defines
        .extend(cli.undefine.iter().map(|name| MacroDefinition::undefined(name)));

    Ok(config)
}

fn cmd_list<W: Write>(map: &IdMap, format: &str, out: &mut W) -> Result<()> {
    if format == "json" {
        writeln!(out, "{}", serde_json::to_string_pretty(map)?)?;
        return Ok(());
    }

    for source in map {
        writeln!(out, "{} ({} tests)", source.path.display(), source.tests.len())?;
        for test in &source.tests {
            writeln!(out, "  {}", test)?;
        }
    }
    writeln!(out, "{} tests in {} files", map.total_tests(), map.len())?;

    Ok(())
}
