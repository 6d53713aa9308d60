//! Ordered rule tables and the last-match-wins transform

use std::fmt;

use crate::rule::CompiledRule;

/// Which way a word is being inflected
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Singular to plural
    Pluralize,
    /// Plural to singular
    Singularize,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Pluralize => write!(f, "pluralize"),
            Direction::Singularize => write!(f, "singularize"),
        }
    }
}

/// Immutable, ordered sequence of compiled rules for one direction
///
/// Order is priority: rules later in the table override earlier ones when
/// both match the same word.
#[derive(Debug, Clone)]
pub struct RuleTable {
    direction: Direction,
    rules: Vec<CompiledRule>,
}

impl RuleTable {
    pub(crate) fn new(direction: Direction, rules: Vec<CompiledRule>) -> Self {
        Self { direction, rules }
    }

    /// Direction this table inflects towards
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of compiled rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in priority order, lowest first
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Inflect `word` using every matching rule, the last one winning
    ///
    /// Each matching rule is applied to the original `word`, not to the
    /// output of the previous match. Words no rule matches come back as-is.
    pub fn transform(&self, word: &str) -> String {
        self.rules
            .iter()
            .fold(None, |result, rule| {
                rule.apply(word, self.direction).or(result)
            })
            .unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn table(direction: Direction, rules: &[(&str, &str)]) -> RuleTable {
        let compiled = rules
            .iter()
            .map(|&pair| Rule::from(pair).compile().unwrap())
            .collect();
        RuleTable::new(direction, compiled)
    }

    #[test]
    fn test_unmatched_word_passes_through() {
        let t = table(Direction::Pluralize, &[("([a-z])$", "${1}s")]);
        assert_eq!(t.transform("123"), "123");
        assert_eq!(t.transform(""), "");
    }

    #[test]
    fn test_last_match_wins() {
        let t = table(
            Direction::Pluralize,
            &[("([a-z])$", "${1}s"), ("(x|ch|ss|sh)$", "${1}es")],
        );
        assert_eq!(t.transform("box"), "boxes");
        assert_eq!(t.transform("cat"), "cats");
    }

    #[test]
    fn test_earlier_rule_does_not_override_later() {
        let t = table(
            Direction::Pluralize,
            &[("(x|ch|ss|sh)$", "${1}es"), ("([a-z])$", "${1}s")],
        );
        assert_eq!(t.transform("box"), "boxs");
    }

    #[test]
    fn test_rules_apply_to_original_word() {
        let t = table(Direction::Singularize, &[("", "s$"), ("${1}", "(ss)$")]);
        assert_eq!(t.transform("class"), "class");
        assert_eq!(t.transform("cats"), "cat");
    }

    #[test]
    fn test_table_accessors() {
        let t = table(Direction::Singularize, &[("", "s$")]);
        assert_eq!(t.direction(), Direction::Singularize);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.rules()[0].rule().plural, "s$");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Pluralize.to_string(), "pluralize");
        assert_eq!(Direction::Singularize.to_string(), "singularize");
    }
}
