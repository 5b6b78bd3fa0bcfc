// rollcall - reconcile a roster against OCR'd attendance sheets

mod audit;
mod config;
mod exit_codes;
mod normalize;
mod scan;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rollcall_io::IoError;
use rollcall_recon::ReconError;

use exit_codes::{io_exit_code, recon_exit_code, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Fuzzy attendance reconciliation: roster CSV vs OCR'd sign-in sheet")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Log engine decisions to stderr (same as RUST_LOG=debug)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark each roster entry attended or absent
    #[command(after_help = "\
Examples:
  rollcall scan roster.csv sheet.txt
  rollcall scan roster.csv sheet.txt -o marked.csv
  rollcall scan roster.csv sheet.txt --config rollcall.toml --json")]
    Scan {
        /// Roster CSV with First Name / Last Name columns
        roster: PathBuf,

        /// Raw text extracted from the attendance sheet
        document: PathBuf,

        /// Output roster (default: roster_new.csv next to the roster)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// TOML config file (cutoffs, columns, cleaning rules)
        #[arg(long, env = "ROLLCALL_CONFIG")]
        config: Option<PathBuf>,

        /// Print a JSON summary to stdout
        #[arg(long)]
        json: bool,
    },

    /// Propose the best document match for each absent roster entry
    #[command(after_help = "\
Examples:
  rollcall audit roster_new.csv sheet.txt
  rollcall audit roster_new.csv sheet.txt --format json -o proposals.json
  rollcall audit roster_new.csv sheet.txt --json")]
    Audit {
        /// Roster CSV, usually the scan output (reads its Attended column)
        roster: PathBuf,

        /// Raw text extracted from the attendance sheet
        document: PathBuf,

        /// Output file (default: missing_attendance_best_matches.csv next to the roster)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Output file format
        #[arg(long, value_enum, default_value_t = audit::AuditFormat::Csv)]
        format: audit::AuditFormat,

        /// TOML config file (cutoffs, columns, cleaning rules)
        #[arg(long, env = "ROLLCALL_CONFIG")]
        config: Option<PathBuf>,

        /// Print the report as JSON to stdout instead of the per-row listing
        #[arg(long)]
        json: bool,
    },

    /// Print the cleaned, normalized token stream of a document
    #[command(after_help = "\
Examples:
  rollcall normalize sheet.txt
  rollcall normalize sheet.txt --json")]
    Normalize {
        document: PathBuf,

        /// TOML config file (cleaning rules)
        #[arg(long, env = "ROLLCALL_CONFIG")]
        config: Option<PathBuf>,

        /// Print tokens with positions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or check configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine:  rollcall-recon ", env!("CARGO_PKG_VERSION"),
        "\nbuild:   ", env!("BUILD_PROFILE"),
    )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Also installs the `log` bridge, so engine records come through
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan { roster, document, output, config, json } => {
            scan::cmd_scan(roster, document, output, config, json)
        }
        Commands::Audit { roster, document, output, format, config, json } => {
            audit::cmd_audit(roster, document, output, format, config, json)
        }
        Commands::Normalize { document, config, json } => {
            normalize::cmd_normalize(document, config, json)
        }
        Commands::Config { command } => config::cmd_config(command),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<IoError> for CliError {
    fn from(err: IoError) -> Self {
        let hint = match &err {
            IoError::MissingColumn { .. } => {
                Some("map your roster headers with a [columns] section in --config".to_string())
            }
            IoError::InvalidAttended { .. } => {
                Some("Attended must be 0/1 (or empty); re-run `rollcall scan` to rebuild it".to_string())
            }
            _ => None,
        };
        Self { code: io_exit_code(&err), message: err.to_string(), hint }
    }
}

impl From<ReconError> for CliError {
    fn from(err: ReconError) -> Self {
        Self {
            code: recon_exit_code(&err),
            message: err.to_string(),
            hint: Some("run `rollcall config show` to see the defaults".to_string()),
        }
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Metadata block carried by every --json payload.
#[derive(Debug, Serialize)]
pub struct RunMeta {
    pub command: &'static str,
    pub engine_version: &'static str,
    pub run_at: String,
}

impl RunMeta {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            engine_version: env!("CARGO_PKG_VERSION"),
            run_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Print exactly one JSON value on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::other(format!("JSON serialization error: {e}")))?;
    println!("{json}");
    Ok(())
}

/// `-o` if given, else `default_name` in the roster's directory.
pub fn resolve_output(
    roster: &Path,
    output: Option<PathBuf>,
    default_name: &str,
) -> Result<PathBuf, CliError> {
    let path = match output {
        Some(path) => path,
        None => roster
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(default_name),
    };
    if path.is_dir() {
        return Err(CliError::args(format!("output path {} is a directory", path.display())));
    }
    Ok(path)
}
