//! Extraction of aligned title payloads from a document store.
mod builder;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod types;

pub use builder::PayloadBuilder;
pub use options::ExtractOptions;
pub use pipeline::Extract;
pub use report::{AlignmentWarning, ExtractReport, TitleFailure};
