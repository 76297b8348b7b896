//! Positional alignment between a root text and a translation.
//!
//! Both segmentations are expected to follow the same chapter structure:
//! the i-th fragment of the translation translates the i-th fragment of the root text.
//! Nothing checks that beyond comparing their lengths.
use std::fmt;

use log::debug;

use super::{AsSpan, Span};
use crate::filtering::{EmptySpan, Filter};

/// Root and translation segmentations that do not have the same number of segments.
///
/// Alignment still happens on the common prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub root: usize,
    pub translation: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment count mismatch: root has {}, translation has {} (aligned {})",
            self.root,
            self.translation,
            self.root.min(self.translation)
        )
    }
}

/// Index-aligned span correspondence.
///
/// `alignment_annotation[k]` (translation side) corresponds to `target_annotation[k]` (root side).
/// `k` is the rank among kept pairs, not the original fragment index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    alignment_annotation: Vec<Span>,
    target_annotation: Vec<Span>,
    mismatch: Option<LengthMismatch>,
}

impl Alignment {
    pub fn alignment_annotation(&self) -> &[Span] {
        &self.alignment_annotation
    }

    pub fn target_annotation(&self) -> &[Span] {
        &self.target_annotation
    }

    /// Length mismatch between the two segmentations, if any.
    pub fn mismatch(&self) -> Option<&LengthMismatch> {
        self.mismatch.as_ref()
    }

    /// Get the translation and root sides, in that order.
    pub fn into_parts(self) -> (Vec<Span>, Vec<Span>, Option<LengthMismatch>) {
        (
            self.alignment_annotation,
            self.target_annotation,
            self.mismatch,
        )
    }
}

/// Pair `root` and `translation` spans by position.
///
/// Pairs whose translation span is empty are skipped.
/// Pairing stops at the end of the shortest segmentation, in which case
/// the returned [Alignment] holds a [LengthMismatch].
///
/// # Example
/// ```
/// use segalign::segment::{align, Span};
///
/// let root = [Span::new(0, 1), Span::new(1, 1), Span::new(1, 3)];
/// let translation = [Span::new(0, 2), Span::new(2, 2), Span::new(2, 5)];
/// let alignment = align(&root, &translation);
///
/// assert_eq!(alignment.alignment_annotation(), &[Span::new(0, 2), Span::new(2, 5)]);
/// assert_eq!(alignment.target_annotation(), &[Span::new(0, 1), Span::new(1, 3)]);
/// assert!(alignment.mismatch().is_none());
/// ```
pub fn align<R: AsSpan, T: AsSpan>(root: &[R], translation: &[T]) -> Alignment {
    let filter = EmptySpan::default();

    let mismatch = if root.len() != translation.len() {
        Some(LengthMismatch {
            root: root.len(),
            translation: translation.len(),
        })
    } else {
        None
    };

    let (alignment_annotation, target_annotation): (Vec<Span>, Vec<Span>) = root
        .iter()
        .zip(translation.iter())
        .filter(|(_, translation_span)| filter.detect(translation_span.as_span()))
        .map(|(root_span, translation_span)| (*translation_span.as_span(), *root_span.as_span()))
        .unzip();

    debug!(
        "aligned {} of {} segment pairs",
        alignment_annotation.len(),
        root.len().min(translation.len())
    );

    Alignment {
        alignment_annotation,
        target_annotation,
        mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{annotate, Segment};

    #[test]
    fn skip_empty_translation() {
        let root = [Span::new(0, 1), Span::new(1, 1), Span::new(1, 3)];
        let translation = [Span::new(0, 2), Span::new(2, 2), Span::new(2, 5)];
        let (alignment, target, mismatch) = align(&root, &translation).into_parts();
        assert_eq!(alignment, vec![Span::new(0, 2), Span::new(2, 5)]);
        assert_eq!(target, vec![Span::new(0, 1), Span::new(1, 3)]);
        assert_eq!(mismatch, None);
    }

    #[test]
    fn empty_root_is_kept() {
        // only the translation side decides whether a pair is kept
        let root = [Span::new(0, 0), Span::new(0, 2)];
        let translation = [Span::new(0, 3), Span::new(3, 4)];
        let alignment = align(&root, &translation);
        assert_eq!(alignment.target_annotation(), &root);
        assert_eq!(alignment.alignment_annotation(), &translation);
    }

    #[test]
    fn empty_translation_at_nonzero_cursor() {
        let root = [Span::new(0, 4), Span::new(4, 9)];
        let translation = [Span::new(0, 3), Span::new(3, 3)];
        let alignment = align(&root, &translation);
        assert_eq!(alignment.alignment_annotation(), &[Span::new(0, 3)]);
        assert_eq!(alignment.target_annotation(), &[Span::new(0, 4)]);
    }

    #[test]
    fn truncation_is_reported() {
        let root = [Span::new(0, 1), Span::new(1, 2), Span::new(2, 3)];
        let translation = [Span::new(0, 1), Span::new(1, 2)];
        let alignment = align(&root, &translation);
        assert_eq!(alignment.alignment_annotation().len(), 2);
        assert_eq!(alignment.target_annotation(), &root[..2]);
        assert_eq!(
            alignment.mismatch(),
            Some(&LengthMismatch {
                root: 3,
                translation: 2
            })
        );
    }

    #[test]
    fn same_length_on_both_sides() {
        let (root, _) = annotate(&["a", "bb", "", "ccc", "d"]);
        let (translation, _) = annotate(&["", "x", "", "yy", "zzz", "extra"]);
        let alignment = align::<Segment, Segment>(&root, &translation);
        assert_eq!(
            alignment.alignment_annotation().len(),
            alignment.target_annotation().len()
        );
        assert_eq!(alignment.alignment_annotation().len(), 3);
        assert!(alignment.mismatch().is_some());
    }

    #[test]
    fn empty_inputs() {
        let empty: [Span; 0] = [];
        let alignment = align(&empty, &empty);
        assert!(alignment.alignment_annotation().is_empty());
        assert!(alignment.mismatch().is_none());
    }
}
