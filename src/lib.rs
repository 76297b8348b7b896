//! # segalign
//!
//! Segmentation and alignment of root texts and their translations.
//!
//! - [segment] holds the core: chapter flattening, segment annotation and positional alignment,
//! - [filtering] holds the empty span and category filters,
//! - [io] reads document stores and writes title payloads,
//! - [pipelines] ties everything together in the [pipelines::Extract] pipeline.
pub mod error;
pub mod filtering;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod segment;
