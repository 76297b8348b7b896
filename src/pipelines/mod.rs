//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the [extract::Extract] pipeline.
pub mod extract;
pub mod pipeline;

pub use extract::Extract;
pub use pipeline::Pipeline;
