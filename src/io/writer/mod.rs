/*! Title payload writing. !*/
mod payload;

pub use payload::PayloadWriter;
