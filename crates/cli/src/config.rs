//! `rollcall config`: show or validate the TOML configuration.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use rollcall_recon::ReconConfig;

use crate::exit_codes::EXIT_IO;
use crate::CliError;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    #[command(after_help = "\
Examples:
  rollcall config show
  rollcall config show --config rollcall.toml > merged.toml")]
    Show {
        /// Config file to merge over the defaults
        #[arg(long, env = "ROLLCALL_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Check a config file without running anything
    #[command(after_help = "\
Examples:
  rollcall config validate rollcall.toml")]
    Validate {
        /// Path to the TOML config file
        file: PathBuf,
    },
}

pub fn cmd_config(cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Show { config } => {
            let config = load_config(config.as_deref())?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigCommands::Validate { file } => {
            load_config(Some(&file))?;
            eprintln!("ok: {}", file.display());
            Ok(())
        }
    }
}

/// Built-in defaults, or `path` parsed and validated over them.
pub fn load_config(path: Option<&Path>) -> Result<ReconConfig, CliError> {
    let Some(path) = path else {
        return Ok(ReconConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| {
        CliError {
            code: EXIT_IO,
            message: format!("cannot read config {}: {e}", path.display()),
            hint: None,
        }
        .with_hint("omit --config (and unset ROLLCALL_CONFIG) to run with defaults")
    })?;
    let config = ReconConfig::from_toml(&text).map_err(|e| {
        let mut err = CliError::from(e);
        err.message = format!("{}: {}", path.display(), err.message);
        err
    })?;
    tracing::debug!(config = %path.display(), "loaded config");
    Ok(config)
}
