/*! Document store reading.

The store exposes two collections:
- an index, where each entry lists the categories of a title (the title being the last category),
- texts, where each entry is one version (root text or translation) of a title.

[DocumentStore] abstracts over the store backend, [JsonStore] reads an exported store from disk.
!*/
mod store;

pub use store::{DocumentStore, IndexEntry, JsonStore, StoreText};
