//! Pluralize and singularize English nouns
//!
//! Words are matched against ordered tables of regex suffix rules, irregular
//! pairs and uncountable words; the last matching rule decides the result.
//! Words no rule recognizes are returned unchanged.
//!
//! # Example
//!
//! ```rust
//! use inflection::{pluralize, singularize};
//!
//! assert_eq!(pluralize("query"), "queries");
//! assert_eq!(pluralize("Star"), "Stars");
//! assert_eq!(pluralize("person"), "people");
//! assert_eq!(singularize("CHILDREN"), "CHILD");
//! assert_eq!(singularize("sheep"), "sheep");
//! ```
//!
//! The free functions share one lazily built [`Inflector`]. Build your own
//! from [`RuleSources`] to inflect with different rule data.

#![warn(missing_docs)]

pub mod inflector;
pub mod loader;

// Re-export key types
pub use inflection_core::{Direction, InflectionError, Result, Rule, RuleSources, RuleTables};
pub use inflector::Inflector;

/// Plural form of `word` using the embedded English rules
pub fn pluralize(word: &str) -> String {
    loader::english().pluralize(word)
}

/// Singular form of `word` using the embedded English rules
pub fn singularize(word: &str) -> String {
    loader::english().singularize(word)
}

/// The shared English inflector behind [`pluralize`] and [`singularize`]
pub fn default_inflector() -> &'static Inflector {
    loader::english()
}
