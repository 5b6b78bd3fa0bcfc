//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Code | Domain     | Description                                   |
//! |------|------------|-----------------------------------------------|
//! | 0    | Universal  | Success                                       |
//! | 1    | Universal  | General error (unspecified)                   |
//! | 2    | Universal  | CLI usage error (bad args)                    |
//! | 3    | Files      | Cannot read or write an input/output file     |
//! | 4    | Config     | Config file does not parse or validate        |
//! | 5    | Roster     | Roster missing a column or holding bad values |
//!
//! "No match" is never an error: a scan that marks nobody attended and an
//! audit with no candidates both exit 0.
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into `CliError` or the relevant command

use rollcall_io::IoError;
use rollcall_recon::ReconError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Workflow (3-5)
// =============================================================================

/// Roster, document, config or output file could not be read or written.
pub const EXIT_IO: u8 = 3;

/// Config file parse or validation failure, including bad cleaning patterns.
pub const EXIT_INVALID_CONFIG: u8 = 4;

/// Roster lacks a required column or has an unparseable Attended value.
pub const EXIT_ROSTER: u8 = 5;

// =============================================================================
// Error mapping
// =============================================================================

pub fn io_exit_code(err: &IoError) -> u8 {
    match err {
        IoError::Read { .. } | IoError::Write { .. } => EXIT_IO,
        IoError::Csv(_) | IoError::MissingColumn { .. } | IoError::InvalidAttended { .. } => {
            EXIT_ROSTER
        }
    }
}

pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_)
        | ReconError::ConfigValidation(_)
        | ReconError::InvalidPattern { .. } => EXIT_INVALID_CONFIG,
    }
}
