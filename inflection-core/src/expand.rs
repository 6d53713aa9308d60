//! Mechanical derivation of rule variants
//!
//! Rule data is authored once in lowercase. The functions here derive the
//! variants that let the same data serve `star`, `Star` and `STAR`, and turn
//! bare irregular words into end-anchored patterns. All of them are pure and
//! return a fresh [`Rule`].

use crate::rule::Rule;

const CASE_INSENSITIVE_FLAG: &str = "(?i)";
const END_ANCHOR: &str = "$";

/// Match the singular side case-insensitively; the plural template is kept
pub fn case_insensitive_plural(rule: &Rule) -> Rule {
    Rule::new(format!("{CASE_INSENSITIVE_FLAG}{}", rule.singular), &*rule.plural)
}

/// Match the plural side case-insensitively; the singular template is kept
pub fn case_insensitive_singular(rule: &Rule) -> Rule {
    Rule::new(&*rule.singular, format!("{CASE_INSENSITIVE_FLAG}{}", rule.plural))
}

/// Upper-case both sides
pub fn upper_case(rule: &Rule) -> Rule {
    Rule::new(rule.singular.to_uppercase(), rule.plural.to_uppercase())
}

/// Capitalize the leading letter of every word on both sides
pub fn title_case_rule(rule: &Rule) -> Rule {
    Rule::new(title_case(&rule.singular), title_case(&rule.plural))
}

/// Anchor the singular side to the end of the input
pub fn delimited_plural(rule: &Rule) -> Rule {
    Rule::new(format!("{}{END_ANCHOR}", rule.singular), &*rule.plural)
}

/// Anchor the plural side to the end of the input
pub fn delimited_singular(rule: &Rule) -> Rule {
    Rule::new(&*rule.singular, format!("{}{END_ANCHOR}", rule.plural))
}

/// Upper-case every letter that begins a word, leaving the rest untouched
///
/// A word begins at the start of the string or after any character that is
/// neither alphanumeric nor `_`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }

    out
}
