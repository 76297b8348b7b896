//! Extraction options.
use crate::lang::LanguageConfig;
use crate::segment::Flattener;

pub const DEFAULT_CATEGORY_ID: &str = "rw8oWUd1WtwqeD2x0ZMSm";
pub const DEFAULT_LICENSE: &str = "CC0";
pub const DEFAULT_COPYRIGHT: &str = "Public Domain";
pub const INSTANCE_TYPE: &str = "critical";

/// Options shared by every title of an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Flattening (and fragment normalization) settings.
    pub flattener: Flattener,
    /// Fail titles whose root and translation segment counts differ,
    /// instead of aligning the common prefix and reporting.
    pub strict: bool,
    pub languages: LanguageConfig,
    pub category_id: String,
    pub license: String,
    pub copyright: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            flattener: Flattener::default(),
            strict: false,
            languages: LanguageConfig::default(),
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            copyright: DEFAULT_COPYRIGHT.to_string(),
        }
    }
}
