//! Output records.
//!
//! A title is written as a [TitlePayload], holding its root text(s) and its translations.
//! Each record owns its content and segmentation. Translations also carry
//! their alignment with the root text, with root spans copied by value.
use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lang::TextType;
use crate::segment::{Segment, Span};

/// Pass-through record metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub text_type: TextType,
    pub instance_type: String,
    pub source: String,
    /// First fragment of the text.
    pub colophon: String,
    /// Version title, keyed by language.
    pub incipit_title: BTreeMap<String, String>,
    pub language: String,
    pub category_id: String,
    pub license: String,
    pub copyright: String,
    pub contributions: Vec<serde_json::Value>,
    pub date: NaiveDate,
    pub bdrc: String,
}

/// A root text, and the common part of a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Record {
    pub metadata: Metadata,
    pub segment_annotation: Vec<Segment>,
    #[serde(rename = "biblography_annotation")]
    pub bibliography_annotation: Vec<serde_json::Value>,
    pub content: String,
}

impl Record {
    pub fn new(metadata: Metadata, segment_annotation: Vec<Segment>, content: String) -> Self {
        Self {
            metadata,
            segment_annotation,
            bibliography_annotation: Vec::new(),
            content,
        }
    }
}

/// A translation, aligned with the root text.
///
/// `alignment_annotation` holds translation spans, `target_annotation` the matching root spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Translation {
    #[serde(flatten)]
    pub record: Record,
    pub alignment_annotation: Vec<Span>,
    pub target_annotation: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TitlePayload {
    pub root_texts: Vec<Record>,
    pub translations: Vec<Translation>,
}

impl TitlePayload {
    /// The root text translations are aligned with.
    ///
    /// Fails with [Error::MissingRootText] if the title has no root text.
    pub fn root(&self, title: &str) -> Result<&Record, Error> {
        self.root_texts
            .first()
            .ok_or_else(|| Error::MissingRootText(title.to_string()))
    }

    /// JSON schema of the payload.
    pub fn schema() -> Result<String, Error> {
        serde_json::to_string_pretty(&schemars::schema_for!(Self)).map_err(Error::Serde)
    }
}
