//! `rollcall-recon`: fuzzy roster-to-document name reconciliation engine.
//!
//! Pure engine crate: receives roster records and raw document text, returns
//! attendance flags and ranked correction proposals. No CLI or IO dependencies.

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod rank;
pub mod similarity;
pub mod window;

pub use config::{ColumnMapping, MatchConfig, NormalizeRules, ReconConfig, ScanConfig};
pub use document::{Document, Token};
pub use engine::{run_audit, run_scan};
pub use error::ReconError;
pub use model::{
    AuditReport, AuditResult, AuditSummary, CandidateMatch, Direction, RosterRecord, ScanSummary,
};
pub use normalize::{normalize, Cleaner};
