//! Language resolution.
//!
//! The document store labels some texts with language codes that are not the ones
//! expected downstream (Chinese texts are stored as `he`).
//! Codes go through an alias table then get parsed as BCP47 tags.
//!
//! A text is a root text when its (resolved) language is the root language,
//! and a translation otherwise.
use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;
use oxilangtag::LanguageTag;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

lazy_static! {
    /// Store language codes that have to be replaced.
    pub static ref DEFAULT_ALIASES: HashMap<&'static str, &'static str> =
        [("he", "zh")].into_iter().collect();
}

pub const DEFAULT_ROOT_LANGUAGE: &str = "bo";

/// Role of a text in a title group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    Root,
    Translation,
}

/// A `from=to` language alias, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangAlias {
    pub from: String,
    pub to: String,
}

impl FromStr for LangAlias {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => Ok(Self {
                from: from.trim().to_string(),
                to: to.trim().to_string(),
            }),
            _ => Err(Error::Custom(format!(
                "invalid language alias {:?}, expected <from>=<to>",
                s
            ))),
        }
    }
}

impl fmt::Display for LangAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageConfig {
    root: LanguageTag<String>,
    aliases: HashMap<String, String>,
}

impl LanguageConfig {
    /// Create a language configuration.
    ///
    /// Fails if `root` is not a valid language tag.
    pub fn new(root: &str, aliases: Vec<LangAlias>) -> Result<Self, Error> {
        let root = parse_tag(root)?;
        let aliases = aliases.into_iter().map(|a| (a.from, a.to)).collect();
        Ok(Self { root, aliases })
    }

    pub fn root(&self) -> &LanguageTag<String> {
        &self.root
    }

    /// Resolve a store language code into a language tag.
    pub fn resolve(&self, code: &str) -> Result<LanguageTag<String>, Error> {
        let code = self.aliases.get(code).map(String::as_str).unwrap_or(code);
        parse_tag(code)
    }

    pub fn text_type(&self, lang: &LanguageTag<String>) -> TextType {
        if lang == &self.root {
            TextType::Root
        } else {
            TextType::Translation
        }
    }
}

impl Default for LanguageConfig {
    /// `bo` root language, with the default aliases.
    fn default() -> Self {
        Self {
            root: LanguageTag::parse(DEFAULT_ROOT_LANGUAGE.to_string()).unwrap(),
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

fn parse_tag(code: &str) -> Result<LanguageTag<String>, Error> {
    LanguageTag::parse(code.to_string())
        .map_err(|e| Error::UnknownLang(format!("{}: {}", code, e)))
}
