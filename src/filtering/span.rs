//! Empty span filtering.
use super::Filter;
use crate::segment::{AsSpan, Span};

/// Keeps spans that cover at least one codepoint.
///
/// A span is empty when `start == end`, wherever it sits in the text.
/// The same predicate is used when aligning, so that filtered segmentations
/// and alignments agree on what an empty fragment is.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptySpan;

impl Filter<&Span> for EmptySpan {
    fn detect(&self, span: &Span) -> bool {
        !span.is_empty()
    }
}

impl EmptySpan {
    /// Remove empty entries, keeping the order of the remaining ones.
    pub fn filter<T: AsSpan>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .filter(|item| self.detect(item.as_span()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{annotate, Segment};

    #[test]
    fn detect() {
        let f = EmptySpan::default();
        assert!(f.detect(&Span::new(0, 1)));
        assert!(!f.detect(&Span::new(0, 0)));
        assert!(!f.detect(&Span::new(7, 7)));
    }

    #[test]
    fn filter_segments() {
        let (segments, _) = annotate(&["", "ab", "", "", "c", ""]);
        let filtered = EmptySpan::default().filter(segments);
        let expected: Vec<Segment> = vec![Span::new(0, 2).into(), Span::new(2, 3).into()];
        assert_eq!(filtered, expected);
    }

    #[test]
    fn idempotent() {
        let f = EmptySpan::default();
        let spans = vec![
            Span::new(0, 0),
            Span::new(0, 3),
            Span::new(3, 3),
            Span::new(3, 5),
        ];
        let once = f.filter(spans);
        let twice = f.filter(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once, vec![Span::new(0, 3), Span::new(3, 5)]);
    }
}
