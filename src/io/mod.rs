/*!
# IO utilities

Document store reading and title payload saving.
!*/
pub mod reader;
pub mod writer;

pub use reader::{DocumentStore, JsonStore};
pub use writer::PayloadWriter;
