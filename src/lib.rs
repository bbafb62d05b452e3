pub mod commands;
pub mod error;
pub mod notify;
pub mod parser;
pub mod report;
pub mod utils;

// Re-export common items
pub use error::ReportError;
pub use parser::ArtifactKind;
pub use report::Report;
