//! Character spans.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A `[start, end)` range of codepoints into a concatenated text.
///
/// `end` is never lower than `start`. A span where both bounds are equal
/// represents an empty fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "SpanSer")]
pub struct Span {
    start: usize,
    end: usize,
}

#[derive(Deserialize, JsonSchema)]
struct SpanSer {
    start: usize,
    end: usize,
}

impl TryFrom<SpanSer> for Span {
    type Error = String;
    fn try_from(s: SpanSer) -> Result<Self, Self::Error> {
        if s.end < s.start {
            return Err(format!("invalid span: end {} < start {}", s.end, s.start));
        }
        Ok(Span {
            start: s.start,
            end: s.end,
        })
    }
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    /// If `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "span end {} < start {}", end, start);
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of codepoints covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// A span is empty when it starts where it ends, whatever its position.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the part of `text` covered by this span.
    ///
    /// Returns [None] if the span goes past the end of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut boundaries = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(text.len()));
        let start = boundaries.nth(self.start)?;
        let end = if self.is_empty() {
            start
        } else {
            boundaries.nth(self.len() - 1)?
        };
        Some(&text[start..end])
    }
}

/// Segment annotation entry, serialized as `{"span": {"start": .., "end": ..}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    span: Span,
}

impl Segment {
    pub fn new(span: Span) -> Self {
        Self { span }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl From<Span> for Segment {
    fn from(span: Span) -> Self {
        Self { span }
    }
}

/// Anything that carries a [Span].
///
/// Lets alignment and filtering work both on raw spans and on segment annotation entries.
pub trait AsSpan {
    fn as_span(&self) -> &Span;
}

impl AsSpan for Span {
    fn as_span(&self) -> &Span {
        self
    }
}

impl AsSpan for Segment {
    fn as_span(&self) -> &Span {
        &self.span
    }
}
