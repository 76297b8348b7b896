/*! Extraction output types. !*/
mod record;

pub use record::{Metadata, Record, TitlePayload, Translation};
