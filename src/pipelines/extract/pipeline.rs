//! Aligned payload extraction pipeline.
//!
//! # Processing
//! 1. Titles are selected from the store index using a [CategoryFilter].
//! 1. For each title (concurrently), every version is fetched, flattened and annotated.
//! 1. Translations are aligned with the root text, and their empty segments removed.
//! 1. The title payload is written in its own JSON file.
//!
//! A failing title is logged and skipped, the run carries on with the other ones.
//! Failures and partial alignments are listed in the returned [ExtractReport].
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use log::{debug, error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::CategoryFilter;
use crate::io::{DocumentStore, PayloadWriter};
use crate::pipelines::extract::{
    AlignmentWarning, ExtractOptions, ExtractReport, PayloadBuilder, TitleFailure,
};
use crate::pipelines::pipeline::Pipeline;

pub struct Extract<S: DocumentStore> {
    store: S,
    writer: PayloadWriter,
    filter: CategoryFilter,
    options: ExtractOptions,
    date: NaiveDate,
}

impl<S: DocumentStore> Extract<S> {
    pub fn new(
        store: S,
        writer: PayloadWriter,
        filter: CategoryFilter,
        options: ExtractOptions,
    ) -> Self {
        debug!("extraction options: {:?}", options);
        Self {
            store,
            writer,
            filter,
            options,
            date: Local::now().date_naive(),
        }
    }

    /// Set the date written in record metadata (defaults to today).
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Fetch, build and write a single title.
    fn process_title(&self, title: &str) -> Result<(PathBuf, Vec<AlignmentWarning>), Error> {
        info!("working on title: {:?}", title);
        let texts = self.store.texts(title)?;
        debug!("{:?}: {} versions", title, texts.len());

        let builder = PayloadBuilder::new(&self.options, self.date);
        let (payload, warnings) = builder.build(title, &texts)?;

        let path = self.writer.write(title, &payload)?;
        info!(
            "{:?}: {} root texts, {} translations written to {:?}",
            title,
            payload.root_texts.len(),
            payload.translations.len(),
            path
        );
        Ok((path, warnings))
    }
}

impl<S: DocumentStore> Pipeline<ExtractReport> for Extract<S> {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<ExtractReport, Error> {
        let titles = self.store.titles(&self.filter)?;
        info!("{} titles selected", titles.len());

        let results: Vec<_> = titles
            .par_iter()
            .map(|title| (title, self.process_title(title)))
            .collect();

        let mut report = ExtractReport::default();
        for (title, result) in results {
            match result {
                Ok((path, warnings)) => {
                    report.written.push(path);
                    report.warnings.extend(warnings);
                }
                Err(e) => {
                    error!("Error with title {:?}: {}", title, e);
                    report.failures.push(TitleFailure {
                        title: title.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
