//! Pattern pairs and their compiled form
//!
//! A [`Rule`] is the raw pair of strings as authored in the rule data. The
//! singular side is the pattern matched when pluralizing and the template
//! produced when singularizing; the plural side plays the opposite roles.
//! [`Rule::compile`] turns both sides into matchers at once, so a
//! [`CompiledRule`] has the same shape no matter which table it ends up in.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{InflectionError, Result};
use crate::table::Direction;

/// Uncompiled singular/plural pattern pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Singular-side pattern or template
    pub singular: String,
    /// Plural-side pattern or template
    pub plural: String,
}

impl Rule {
    /// Create a rule from its two sides
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Compile both sides into regular expressions
    pub fn compile(&self) -> Result<CompiledRule> {
        Ok(CompiledRule {
            singular_re: compile_pattern(&self.singular)?,
            plural_re: compile_pattern(&self.plural)?,
            rule: self.clone(),
        })
    }
}

impl<S: Into<String>, P: Into<String>> From<(S, P)> for Rule {
    fn from((singular, plural): (S, P)) -> Self {
        Rule::new(singular, plural)
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| InflectionError::PatternCompile {
        pattern: pattern.to_string(),
        source,
    })
}

/// A rule with both sides compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: Rule,
    singular_re: Regex,
    plural_re: Regex,
}

impl CompiledRule {
    /// The source pair this rule was compiled from
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Matcher evaluated against input words in `direction`
    #[inline]
    pub fn matcher(&self, direction: Direction) -> &Regex {
        match direction {
            Direction::Pluralize => &self.singular_re,
            Direction::Singularize => &self.plural_re,
        }
    }

    /// Replacement template emitted in `direction`
    #[inline]
    pub fn template(&self, direction: Direction) -> &str {
        match direction {
            Direction::Pluralize => &self.rule.plural,
            Direction::Singularize => &self.rule.singular,
        }
    }

    /// Rewrite `word` if this rule matches it
    ///
    /// Every match of the pattern is replaced, with `${N}` in the template
    /// expanded to the N-th capture group (empty when the group did not
    /// participate). Returns `None` when the pattern does not match.
    pub fn apply(&self, word: &str, direction: Direction) -> Option<String> {
        let re = self.matcher(direction);
        if !re.is_match(word) {
            return None;
        }
        Some(re.replace_all(word, self.template(direction)).into_owned())
    }
}
