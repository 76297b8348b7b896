/*! Segmentation and alignment engine.

Turns nested chapters into a flat list of fragments ([flatten]),
computes character spans of those fragments over their concatenation ([annotate])
and pairs the spans of a root text with the spans of one of its translations ([align]).

Offsets are expressed in Unicode codepoints, not in bytes.
!*/
mod align;
mod annotate;
mod flatten;
mod span;

pub use align::{align, Alignment, LengthMismatch};
pub use annotate::annotate;
pub use flatten::{normalize_fragment, ChapterStructure, Flattener};
pub use span::{AsSpan, Segment, Span};
