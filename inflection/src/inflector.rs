//! Inflector built from a pair of compiled rule tables

use inflection_core::{build_rule_tables, Direction, Result, RuleSources, RuleTables};

use crate::loader;

/// Pluralizes and singularizes words against an immutable pair of rule tables
///
/// An `Inflector` is `Send + Sync` and holds no mutable state, so a single
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Inflector {
    tables: RuleTables,
}

impl Inflector {
    /// The process-wide inflector built from the embedded English rules
    pub fn english() -> &'static Inflector {
        loader::english()
    }

    /// Build an inflector from base rule lists
    pub fn from_sources(sources: &RuleSources) -> Result<Self> {
        Ok(Self {
            tables: build_rule_tables(sources)?,
        })
    }

    /// Build an inflector from rule lists in a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_sources(&loader::parse_sources(toml_str)?)
    }

    /// Wrap already built rule tables
    pub fn from_tables(tables: RuleTables) -> Self {
        Self { tables }
    }

    /// Plural form of `word`, or `word` itself when no rule applies
    pub fn pluralize(&self, word: &str) -> String {
        self.tables.pluralize.transform(word)
    }

    /// Singular form of `word`, or `word` itself when no rule applies
    pub fn singularize(&self, word: &str) -> String {
        self.tables.singularize.transform(word)
    }

    /// Inflect `word` in the given direction
    pub fn inflect(&self, word: &str, direction: Direction) -> String {
        self.tables.get(direction).transform(word)
    }

    /// Number of compiled rules for `direction`
    pub fn rule_count(&self, direction: Direction) -> usize {
        self.tables.get(direction).len()
    }

    /// The underlying rule tables
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }
}
