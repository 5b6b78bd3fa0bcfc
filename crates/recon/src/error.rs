use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (cutoff out of range, zero limits, etc.).
    ConfigValidation(String),
    /// A course-code marker pattern failed to compile.
    InvalidPattern { pattern: String, message: String },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid marker pattern '{pattern}': {message}")
            }
        }
    }
}

impl std::error::Error for ReconError {}
