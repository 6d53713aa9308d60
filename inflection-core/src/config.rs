//! Rule data schema and validation
//!
//! The four source lists are deserialized from a document shaped like:
//!
//! ```toml
//! [[plurals]]
//! singular = "([a-z])$"
//! plural = "${1}s"
//!
//! [[irregulars]]
//! singular = "child"
//! plural = "children"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{InflectionError, Result};
use crate::rule::Rule;

/// The four base rule lists a pair of rule tables is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSources {
    /// Suffix rules for the pluralize direction
    #[serde(default)]
    pub plurals: Vec<Rule>,
    /// Suffix rules for the singularize direction
    #[serde(default)]
    pub singulars: Vec<Rule>,
    /// Whole-word singular/plural pairs
    #[serde(default)]
    pub irregulars: Vec<Rule>,
    /// Words whose singular and plural are the same
    #[serde(default)]
    pub uncountables: Vec<Rule>,
}

impl RuleSources {
    /// Total number of base rules across all four lists
    pub fn len(&self) -> usize {
        self.plurals.len() + self.singulars.len() + self.irregulars.len() + self.uncountables.len()
    }

    /// Whether all four lists are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate the rule data
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(InflectionError::InvalidConfig(
                "no rules defined".to_string(),
            ));
        }

        if let Some(rule) = self
            .irregulars
            .iter()
            .find(|r| r.singular.is_empty() || r.plural.is_empty())
        {
            return Err(InflectionError::InvalidConfig(format!(
                "irregular pair has an empty side: {:?} -> {:?}",
                rule.singular, rule.plural
            )));
        }

        if let Some(rule) = self.uncountables.iter().find(|r| r.singular != r.plural) {
            return Err(InflectionError::InvalidConfig(format!(
                "uncountable entry differs between forms: {:?} -> {:?}",
                rule.singular, rule.plural
            )));
        }

        Ok(())
    }
}
