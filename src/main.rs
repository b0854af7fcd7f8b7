//! matchbench - Main entrypoint.
//!
//! This is the main entry point for the matchbench command line tool.
//! It loads configuration, initializes the logging system, and runs one
//! search, multi-pattern search, or comparison over a text file.

use clap::{Args as ClapArgs, Parser, Subcommand};
use matchbench_lib::config::search::SearchConfig;
use matchbench_lib::config::{
    ConfigLoader, ConfigResult, LogConfig, MatchbenchConfig, Validate, ENV_PREFIX,
};
use matchbench_lib::error::{
    report_error, set_error_reporter, ErrorContext, MatchbenchError, MatchbenchResult,
    TracingErrorReporter,
};
use matchbench_lib::harness::{FileSource, SearchHarness};
use matchbench_lib::matchers::Algorithm;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for matchbench.
#[derive(Parser, Debug)]
#[clap(name = "matchbench", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Matching policy switches shared by the search commands.
#[derive(ClapArgs, Debug)]
struct PolicyArgs {
    /// Fold ASCII case in text and patterns
    #[clap(short = 'i', long)]
    ignore_case: bool,

    /// Only count whole-word matches
    #[clap(short, long)]
    word: bool,
}

impl PolicyArgs {
    /// Switches flags on over whatever the configuration already enables.
    fn apply(&self, search: &mut SearchConfig) {
        search.case_insensitive |= self.ignore_case;
        search.word_boundary |= self.word;
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Search a file for one pattern
    Search {
        /// Text file to search
        #[clap(short, long, value_parser)]
        source: PathBuf,

        /// Pattern to find
        #[clap(short, long)]
        pattern: String,

        /// Algorithm to run (defaults to the configured one)
        #[clap(short, long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Rabin-Karp modulus
        #[clap(long)]
        prime: Option<u64>,

        #[clap(flatten)]
        policy: PolicyArgs,

        /// List match positions in the report
        #[clap(long)]
        positions: bool,
    },

    /// Search a file for several patterns in one pass
    Multi {
        /// Text file to search
        #[clap(short, long, value_parser)]
        source: PathBuf,

        /// Patterns to find (repeat the flag)
        #[clap(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        #[clap(flatten)]
        policy: PolicyArgs,
    },

    /// Run every algorithm, the regex baseline and any raw expressions, and print a JSON report
    Compare {
        /// Text file to search
        #[clap(short, long, value_parser)]
        source: PathBuf,

        /// Patterns to find (repeat the flag)
        #[clap(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// Shards for the parallel scans
        #[clap(long)]
        shards: Option<usize>,

        /// Regular expression to run as given alongside the baseline (repeat the flag)
        #[clap(long = "regex")]
        expressions: Vec<String>,

        #[clap(flatten)]
        policy: PolicyArgs,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to stderr so that reports on stdout stay machine-readable.
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> MatchbenchResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    result.map_err(|e| {
        MatchbenchError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Writes `value` to stdout as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> MatchbenchResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn gen_config(output: &Path) -> MatchbenchResult<()> {
    info!("Generating default configuration");
    let default_config = MatchbenchConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| MatchbenchError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(command: Command, loaded: ConfigResult<MatchbenchConfig>) -> MatchbenchResult<()> {
    match command {
        Command::Search {
            source,
            pattern,
            algorithm,
            prime,
            policy,
            positions,
        } => {
            let mut config = loaded?;
            policy.apply(&mut config.search);
            if let Some(prime) = prime {
                config.search.rabin_karp_prime = prime;
                config.search.validate()?;
            }
            let algorithm = algorithm.unwrap_or(config.search.default_algorithm);

            let harness = SearchHarness::new(config);
            let text = harness.load(&FileSource::new(&source))?;
            let mut report = harness.run_single(algorithm, &text, &pattern)?;
            if !positions {
                report.positions.clear();
            }
            print_json(&report)
        }
        Command::Multi {
            source,
            patterns,
            policy,
        } => {
            let mut config = loaded?;
            policy.apply(&mut config.search);

            let harness = SearchHarness::new(config);
            let text = harness.load(&FileSource::new(&source))?;
            let report = harness.run_multi(&text, &patterns)?;
            print_json(&report)
        }
        Command::Compare {
            source,
            patterns,
            shards,
            expressions,
            policy,
        } => {
            let mut config = loaded?;
            policy.apply(&mut config.search);
            if shards.is_some() {
                config.harness.shards = shards;
                config.harness.validate()?;
            }

            let harness = SearchHarness::new(config);
            let report = harness.compare_with_expressions(
                &FileSource::new(&source),
                &patterns,
                &expressions,
            )?;
            print_json(&report)
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Load configuration first so it can pick the log format
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(error) = run(args.command, loaded) {
        report_error(&ErrorContext::new(error, "matchbench"));
        process::exit(1);
    }
}
