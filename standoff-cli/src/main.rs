//! Command-line interface for standoff
//! This binary parses one brat `.ann` file and prints its records, or reports the lines it
//! could not parse.
//!
//! Usage:
//!   standoff `<path>` [--format `<format>`] [--collect-errors] [--config `<file>`]
//!
//! Exit status is 0 when every line parsed, 1 otherwise.

mod output;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use standoff_config::{Loader, OutputFormat, StandoffConfig};
use standoff_parser::standoff::loader::{AnnotationLoader, ErrorPolicy};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when present.
const LOCAL_CONFIG: &str = "standoff.toml";

fn main() {
    let matches = Command::new("standoff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse brat standoff annotation files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the .ann file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default taken from the configuration)")
                .value_parser(PossibleValuesParser::new(OutputFormat::NAMES)),
        )
        .arg(
            Arg::new("collect-errors")
                .long("collect-errors")
                .help("Report every malformed line instead of stopping at the first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config.logging.filter);

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    handle_parse_command(path, &config);
}

/// Defaults, then `./standoff.toml`, then `--config`, then command-line flags.
fn load_config(matches: &ArgMatches) -> Result<StandoffConfig, standoff_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("collect-errors") {
        loader = loader.set_override("parsing.error_policy", "collect-all")?;
    }
    loader.build()
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Handle the parse command
fn handle_parse_command(path: &str, config: &StandoffConfig) {
    let loader = AnnotationLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let policy = config.parsing.error_policy;
    let report = loader.parse_with(policy);
    tracing::debug!(?policy, records = report.records.len(), "parsed {}", path);

    let formatted = output::render_records(&report, config.output.format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    // Fail-fast runs print nothing but the diagnostic
    if report.is_ok() || policy == ErrorPolicy::CollectAll {
        print!("{}", formatted);
    }

    if !report.is_ok() {
        for error in &report.errors {
            eprint!("{}", output::render_diagnostic(error));
        }
        std::process::exit(1);
    }
}
