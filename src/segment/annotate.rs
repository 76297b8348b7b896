//! Segment annotation.
//!
//! Each fragment gets a span starting where the previous one ended,
//! so that the spans tile the concatenated text.
use super::{Segment, Span};

/// Compute the segment annotation of `fragments` along with their concatenation.
///
/// Empty fragments are kept and get an empty span at the current position.
/// # Example
/// ```
/// use segalign::segment::{annotate, Span};
///
/// let (segments, base_text) = annotate(&["a", "", "bc"]);
/// let spans: Vec<Span> = segments.iter().map(|s| *s.span()).collect();
/// assert_eq!(spans, vec![Span::new(0, 1), Span::new(1, 1), Span::new(1, 3)]);
/// assert_eq!(base_text, "abc");
/// ```
pub fn annotate<S: AsRef<str>>(fragments: &[S]) -> (Vec<Segment>, String) {
    let mut segments = Vec::with_capacity(fragments.len());
    let mut base_text = String::with_capacity(fragments.iter().map(|f| f.as_ref().len()).sum());
    let mut cursor = 0;

    for fragment in fragments {
        let fragment = fragment.as_ref();
        let end = cursor + fragment.chars().count();
        segments.push(Segment::new(Span::new(cursor, end)));
        base_text.push_str(fragment);
        cursor = end;
    }

    (segments, base_text)
}
