use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum IoError {
    Read { path: PathBuf, message: String },
    Write { path: PathBuf, message: String },
    Csv(String),
    MissingColumn { column: String, available: Vec<String> },
    /// `row` is the 0-based data row, not counting the header.
    InvalidAttended { row: usize, value: String },
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Read { path, message } => {
                write!(f, "cannot read {}: {message}", path.display())
            }
            IoError::Write { path, message } => {
                write!(f, "cannot write {}: {message}", path.display())
            }
            IoError::Csv(msg) => write!(f, "CSV error: {msg}"),
            IoError::MissingColumn { column, available } => {
                write!(
                    f,
                    "roster has no '{column}' column (found: {})",
                    available.join(", ")
                )
            }
            IoError::InvalidAttended { row, value } => {
                write!(f, "row {row}: Attended value '{value}' is not 0/1")
            }
        }
    }
}

impl std::error::Error for IoError {}
