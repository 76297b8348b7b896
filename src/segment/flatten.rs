/*!
Chapter flattening.

Documents come as a list of sub-chapters, each holding a list of fragments.
Flattening keeps the document order and keeps empty fragments, so that
fragment positions stay comparable between a root text and its translations.

Inline line breaks (`<br>`, `<br/>`, `<br />`) are removed by default,
along with the whitespace surrounding them.
!*/
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"(?i)\s*<br\s*/?>\s*").unwrap();
}

/// Ordered sub-chapters, each being an ordered list of fragments.
pub type ChapterStructure = Vec<Vec<String>>;

/// Strip inline line break markup and surrounding whitespace.
///
/// ```
/// use segalign::segment::normalize_fragment;
///
/// assert_eq!(normalize_fragment("  foo <br/> bar<BR>"), "foobar");
/// ```
pub fn normalize_fragment(fragment: &str) -> String {
    LINE_BREAK.replace_all(fragment, "").trim().to_string()
}

/// Chapter flattener.
///
/// Fragments are normalized by default.
#[derive(Debug, Clone, Copy)]
pub struct Flattener {
    normalize: bool,
}

impl Default for Flattener {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl Flattener {
    pub fn new(normalize: bool) -> Self {
        Self { normalize }
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Flatten chapters into fragments.
    ///
    /// Returns the fragments and the first one (the colophon/incipit),
    /// or [Error::EmptyStructure] if there's no fragment at all.
    pub fn flatten(&self, chapters: &[Vec<String>]) -> Result<(Vec<String>, String), Error> {
        let fragments: Vec<String> = chapters
            .iter()
            .flatten()
            .map(|fragment| {
                if self.normalize {
                    normalize_fragment(fragment)
                } else {
                    fragment.clone()
                }
            })
            .collect();

        let first = fragments.first().cloned().ok_or(Error::EmptyStructure)?;
        debug!(
            "flattened {} chapters into {} fragments",
            chapters.len(),
            fragments.len()
        );

        Ok((fragments, first))
    }
}
