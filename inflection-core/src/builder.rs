//! Assembly of the pluralize and singularize tables from rule sources

use crate::config::RuleSources;
use crate::error::Result;
use crate::expand::{
    case_insensitive_plural, case_insensitive_singular, delimited_plural, delimited_singular,
    title_case_rule, upper_case,
};
use crate::rule::Rule;
use crate::table::{Direction, RuleTable};

/// The pair of compiled tables built from one set of rule sources
#[derive(Debug, Clone)]
pub struct RuleTables {
    /// Singular-to-plural rules
    pub pluralize: RuleTable,
    /// Plural-to-singular rules
    pub singularize: RuleTable,
}

impl RuleTables {
    /// Table for `direction`
    pub fn get(&self, direction: Direction) -> &RuleTable {
        match direction {
            Direction::Pluralize => &self.pluralize,
            Direction::Singularize => &self.singularize,
        }
    }
}

/// Expand, order and compile both rule tables
///
/// Each table is laid out as suffix rules, then uncountables, then
/// irregulars, so that whole-word exceptions override the generic suffix
/// handling under last-match-wins. Any pattern that fails to compile aborts
/// the build.
pub fn build_rule_tables(sources: &RuleSources) -> Result<RuleTables> {
    sources.validate()?;

    let mut pluralize = Vec::new();
    let mut singularize = Vec::new();

    for rule in &sources.plurals {
        pluralize.push(case_insensitive_plural(rule));
        pluralize.push(upper_case(rule));
    }

    for rule in &sources.singulars {
        singularize.push(case_insensitive_singular(rule));
        singularize.push(upper_case(rule));
    }

    for rule in &sources.uncountables {
        pluralize.extend(case_variants(rule, case_insensitive_plural));
        singularize.extend(case_variants(rule, case_insensitive_singular));
    }

    for rule in &sources.irregulars {
        pluralize.extend(case_variants(
            &delimited_plural(rule),
            case_insensitive_plural,
        ));
        singularize.extend(case_variants(
            &delimited_singular(rule),
            case_insensitive_singular,
        ));
    }

    let pluralize = compile_table(Direction::Pluralize, pluralize)?;
    let singularize = compile_table(Direction::Singularize, singularize)?;

    log::debug!(
        "built rule tables: {} pluralize rules, {} singularize rules",
        pluralize.len(),
        singularize.len()
    );

    Ok(RuleTables {
        pluralize,
        singularize,
    })
}

/// Case-insensitive, upper-case and title-case variants of a whole-word rule
fn case_variants(rule: &Rule, case_insensitive: fn(&Rule) -> Rule) -> [Rule; 3] {
    [case_insensitive(rule), upper_case(rule), title_case_rule(rule)]
}

fn compile_table(direction: Direction, rules: Vec<Rule>) -> Result<RuleTable> {
    let compiled = rules
        .iter()
        .map(Rule::compile)
        .collect::<Result<Vec<_>>>()?;
    Ok(RuleTable::new(direction, compiled))
}
