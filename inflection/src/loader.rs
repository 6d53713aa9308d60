//! Embedded rule data loader
//!
//! The English rule lists ship inside the binary and are compiled into rule
//! tables once, on first use.

use std::sync::OnceLock;

use inflection_core::{InflectionError, Result, RuleSources};

use crate::inflector::Inflector;

/// Embedded English rule data
const ENGLISH_RULES: &str = include_str!("../configs/english.toml");

static ENGLISH: OnceLock<Inflector> = OnceLock::new();

/// Process-wide English inflector
///
/// # Panics
///
/// Panics on first access if the embedded rule data does not parse or one of
/// its patterns fails to compile. The data is fixed at build time, so this
/// can only happen through a defect in the rule file.
pub fn english() -> &'static Inflector {
    ENGLISH.get_or_init(|| {
        let inflector = load_english()
            .unwrap_or_else(|e| panic!("embedded English rule data is invalid: {e}"));
        log::debug!("loaded embedded English rule tables");
        inflector
    })
}

/// Parse the embedded English rule lists
pub fn english_sources() -> Result<RuleSources> {
    parse_sources(ENGLISH_RULES)
}

/// Parse rule lists from a TOML document
pub fn parse_sources(toml_str: &str) -> Result<RuleSources> {
    toml::from_str(toml_str).map_err(|e| InflectionError::Parse(e.to_string()))
}

fn load_english() -> Result<Inflector> {
    Inflector::from_sources(&english_sources()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_sources_parse() {
        let sources = english_sources().unwrap();
        assert_eq!(sources.plurals.len(), 21);
        assert_eq!(sources.singulars.len(), 28);
        assert_eq!(sources.irregulars.len(), 103);
        assert_eq!(sources.uncountables.len(), 158);
        assert!(sources.validate().is_ok());
    }

    #[test]
    fn test_embedded_sources_order() {
        let sources = english_sources().unwrap();
        assert_eq!(sources.plurals[0].singular, "([a-z])$");
        assert_eq!(sources.plurals[0].plural, "${1}s");
        assert_eq!(sources.singulars[0].plural, "s$");
        assert_eq!(sources.singulars[0].singular, "");
        assert_eq!(sources.irregulars[0].singular, "addendum");
        assert_eq!(sources.uncountables[0].singular, "accommodation");
    }

    #[test]
    fn test_parse_sources_missing_lists_default_empty() {
        let sources = parse_sources("irregulars = [{ singular = 'ox', plural = 'oxen' }]").unwrap();
        assert!(sources.plurals.is_empty());
        assert_eq!(sources.irregulars.len(), 1);
    }

    #[test]
    fn test_parse_sources_rejects_malformed_document() {
        let err = parse_sources("plurals = [{ singular = 's$' }]").unwrap_err();
        assert!(matches!(err, InflectionError::Parse(_)));
    }

    #[test]
    fn test_english_is_shared() {
        assert!(std::ptr::eq(english(), english()));
    }
}
