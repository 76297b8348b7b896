//! Category-based selection of store index entries.
use super::Filter;

/// Default categories: root texts of the Bodhicaryavatara commentarial corpus.
const DEFAULT_CATEGORIES: [&str; 4] = ["Madhyamaka", "Prasangika", "Bodhicaryavatara", "Root text"];

/// Conjunctive category filter.
///
/// An entry passes if its categories contain every required category, in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    required: Vec<String>,
}

impl CategoryFilter {
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            required: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Filter<&[String]> for CategoryFilter {
    fn detect(&self, categories: &[String]) -> bool {
        self.required
            .iter()
            .all(|required| categories.contains(required))
    }
}
