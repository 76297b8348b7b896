//! JSON payload writer.
//!
//! Each title is written in its own pretty-printed JSON file, named after the title.
//! Non-ASCII characters are written as is.
//!
//! Payloads are first serialized in a temporary file inside the destination,
//! which then replaces the title's file. A failed write leaves any previous file intact.
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::Error;
use crate::pipelines::extract::types::TitlePayload;

pub struct PayloadWriter {
    dst: PathBuf,
}

impl PayloadWriter {
    /// Create a new writer, creating `dst` if it does not exist.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        if !dst.exists() {
            warn!("Destination {:?} does not exist. Creating", dst);
            std::fs::create_dir_all(dst)?;
        }
        if !dst.is_dir() {
            return Err(Error::Custom(format!(
                "Destination has to be a directory: {:?}",
                dst
            )));
        }
        Ok(Self {
            dst: dst.to_path_buf(),
        })
    }

    /// File path of a given title. `/` are replaced by `_`.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dst.join(format!("{}.json", title.replace('/', "_")))
    }

    /// Write `payload`, overwriting any previous file for `title`.
    pub fn write(&self, title: &str, payload: &TitlePayload) -> Result<PathBuf, Error> {
        let path = self.path_for(title);
        self.write_value(&path, payload)?;
        debug!("written {:?}", path);
        Ok(path)
    }

    fn write_value<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), Error> {
        // dropping the temporary file on error removes it
        let mut tmp = NamedTempFile::new_in(&self.dst)?;
        {
            let mut writer = BufWriter::new(&mut tmp);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        tmp.persist(path)?;
        Ok(())
    }
}
