//! Title payload building.
//!
//! For a given title, every store version is flattened and annotated,
//! then each translation is aligned against the root text
//! and stripped of its empty segments.
use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::error::Error;
use crate::filtering::EmptySpan;
use crate::io::reader::StoreText;
use crate::lang::TextType;
use crate::pipelines::extract::options::{ExtractOptions, INSTANCE_TYPE};
use crate::pipelines::extract::report::AlignmentWarning;
use crate::pipelines::extract::types::{Metadata, Record, TitlePayload, Translation};
use crate::segment::{align, annotate};

lazy_static! {
    static ref BRACKETED: Regex = Regex::new(r"\s*\[[^\]]*\]").unwrap();
}

/// Remove bracketed annotations (`"Title [Source]"` → `"Title"`) from a version title.
fn clean_version_title(version_title: &str) -> String {
    BRACKETED.replace_all(version_title, "").trim().to_string()
}

pub struct PayloadBuilder<'a> {
    options: &'a ExtractOptions,
    date: NaiveDate,
}

impl<'a> PayloadBuilder<'a> {
    /// `date` is the extraction date written in every record.
    pub fn new(options: &'a ExtractOptions, date: NaiveDate) -> Self {
        Self { options, date }
    }

    /// Flatten, annotate and describe a single store version.
    pub fn build_record(&self, text: &StoreText) -> Result<Record, Error> {
        let language = self.options.languages.resolve(&text.actual_language)?;
        let text_type = self.options.languages.text_type(&language);

        let (fragments, colophon) = self.options.flattener.flatten(&text.chapter)?;
        let (segment_annotation, content) = annotate(&fragments);

        let language = language.to_string();
        let incipit_title = [(language.clone(), clean_version_title(&text.version_title))]
            .into_iter()
            .collect();

        let metadata = Metadata {
            text_type,
            instance_type: INSTANCE_TYPE.to_string(),
            source: text.version_source.clone(),
            colophon,
            incipit_title,
            language,
            category_id: self.options.category_id.clone(),
            license: self.options.license.clone(),
            copyright: self.options.copyright.clone(),
            contributions: Vec::new(),
            date: self.date,
            bdrc: String::new(),
        };

        Ok(Record::new(metadata, segment_annotation, content))
    }

    /// Build the payload of `title` from its store versions.
    ///
    /// Returns the payload along with the alignments that had to be truncated.
    ///
    /// # Errors
    /// - any version has no fragment, or an invalid language,
    /// - the title has no version at all,
    /// - the title has translations but no root text,
    /// - in strict mode, a translation and the root text have different segment counts.
    pub fn build(
        &self,
        title: &str,
        texts: &[StoreText],
    ) -> Result<(TitlePayload, Vec<AlignmentWarning>), Error> {
        if texts.is_empty() {
            return Err(Error::Custom(format!("no texts found for {:?}", title)));
        }

        let records = texts
            .iter()
            .map(|text| self.build_record(text))
            .collect::<Result<Vec<Record>, Error>>()?;

        let (root_texts, translations): (Vec<Record>, Vec<Record>) = records
            .into_iter()
            .partition(|record| record.metadata.text_type == TextType::Root);

        if root_texts.len() > 1 {
            warn!(
                "{:?}: {} root texts, aligning on the first one",
                title,
                root_texts.len()
            );
        }

        let mut payload = TitlePayload {
            root_texts,
            translations: Vec::new(),
        };
        if translations.is_empty() {
            debug!("{:?}: no translations", title);
            return Ok((payload, Vec::new()));
        }

        let root = payload.root(title)?;
        let filter = EmptySpan::default();
        let mut warnings = Vec::new();
        let mut aligned = Vec::with_capacity(translations.len());

        for mut record in translations {
            let (alignment_annotation, target_annotation, mismatch) =
                align(&root.segment_annotation, &record.segment_annotation).into_parts();

            if let Some(mismatch) = mismatch {
                if self.options.strict {
                    return Err(mismatch.into());
                }
                let warning = AlignmentWarning {
                    title: title.to_string(),
                    language: record.metadata.language.clone(),
                    mismatch,
                };
                warn!("{}", warning);
                warnings.push(warning);
            }

            record.segment_annotation = filter.filter(record.segment_annotation);
            aligned.push(Translation {
                record,
                alignment_annotation,
                target_annotation,
            });
        }

        payload.translations = aligned;
        Ok((payload, warnings))
    }
}
