// File I/O: roster tables, document text, audit export

pub mod audit;
pub mod csv;
pub mod document;
pub mod error;
pub mod json;
pub mod roster;

pub use audit::write_audit_csv;
pub use document::load_document;
pub use error::IoError;
pub use json::write_audit_json;
pub use roster::RosterTable;
