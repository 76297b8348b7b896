/*! Document stores.

[JsonStore] reads a store exported as JSON lines:

```text
<store>/
├── index.jsonl        # {"categories": ["Madhyamaka", ..., "<title>"]}
└── texts/
    ├── 0.jsonl        # {"title": "<title>", "chapter": [["..", ..], ..], "actualLanguage": "bo", ..}
    └── ...
```

The whole store is loaded when opened, and released on drop.
!*/
use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::{debug, info, warn};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::Error;
use crate::filtering::{CategoryFilter, Filter};
use crate::segment::ChapterStructure;

/// Entry of the store index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexEntry {
    #[serde(default)]
    pub categories: Vec<String>,
}

impl IndexEntry {
    /// The title of an index entry is its last category.
    pub fn title(&self) -> Option<&str> {
        self.categories.last().map(String::as_str)
    }
}

/// One version of a title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreText {
    pub title: String,
    pub chapter: ChapterStructure,
    pub actual_language: String,
    #[serde(default)]
    pub version_title: String,
    #[serde(default)]
    pub version_source: String,
}

/// Store backend.
///
/// Stores are shared between threads during extraction.
pub trait DocumentStore: Sync {
    /// Titles whose index entry passes `filter`, in index order and without duplicates.
    fn titles(&self, filter: &CategoryFilter) -> Result<Vec<String>, Error>;

    /// Every version of `title`. An unknown title yields no version.
    fn texts(&self, title: &str) -> Result<Vec<StoreText>, Error>;
}

#[derive(Debug)]
pub struct JsonStore {
    location: PathBuf,
    index: Vec<IndexEntry>,
    texts: HashMap<String, Vec<StoreText>>,
}

impl JsonStore {
    /// Open the store located at `location`.
    ///
    /// Fails if the location is not a directory or if any file is invalid.
    pub fn open(location: &Path) -> Result<Self, Error> {
        if !location.is_dir() {
            return Err(Error::Custom(format!(
                "store location {:?} is not a directory",
                location
            )));
        }
        info!("opening store {:?}", location);

        let index: Vec<IndexEntry> = read_jsonl(&location.join("index.jsonl"))?;

        let pattern = location.join("texts").join("*.jsonl");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("non utf-8 store location {:?}", location)))?;

        let mut texts: HashMap<String, Vec<StoreText>> = HashMap::new();
        let mut paths = glob::glob(pattern)?.collect::<Result<Vec<PathBuf>, glob::GlobError>>()?;
        paths.sort();
        for path in paths {
            let file_texts: Vec<StoreText> = read_jsonl(&path)?;
            debug!("{:?}: {} texts", path, file_texts.len());
            for text in file_texts {
                texts.entry(text.title.clone()).or_default().push(text);
            }
        }

        if texts.is_empty() {
            warn!("store {:?} holds no texts", location);
        }
        info!(
            "store {:?}: {} index entries, {} titles with texts",
            location,
            index.len(),
            texts.len()
        );

        Ok(Self {
            location: location.to_path_buf(),
            index,
            texts,
        })
    }

    pub fn location(&self) -> &Path {
        &self.location
    }
}

impl DocumentStore for JsonStore {
    fn titles(&self, filter: &CategoryFilter) -> Result<Vec<String>, Error> {
        let titles = self
            .index
            .iter()
            .filter(|entry| filter.detect(entry.categories.as_slice()))
            .filter_map(|entry| entry.title())
            .unique()
            .map(String::from)
            .collect();
        Ok(titles)
    }

    fn texts(&self, title: &str) -> Result<Vec<StoreText>, Error> {
        Ok(self.texts.get(title).cloned().unwrap_or_default())
    }
}

impl Drop for JsonStore {
    fn drop(&mut self) {
        info!("store {:?} released", self.location);
    }
}

/// Read every JSON value of a JSON lines file.
fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let f = File::open(path).map_err(|e| {
        Error::Custom(format!("could not open store file {:?}: {}", path, e))
    })?;
    let values = serde_json::Deserializer::from_reader(BufReader::new(f))
        .into_iter::<T>()
        .collect::<Result<Vec<T>, serde_json::Error>>()?;
    Ok(values)
}
