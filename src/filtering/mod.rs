/*! Filtering utilities

Filters operate on spans or on store index entries.

Filters implement [filter::Filter]: they are stateless and `detect` returns `true` for items that are kept.
- [EmptySpan] drops degenerate spans from segment annotations,
- [CategoryFilter] selects store index entries that carry every requested category.
! */
mod category;
mod filter;
mod span;

pub use category::CategoryFilter;
pub use filter::Filter;
pub use span::EmptySpan;
