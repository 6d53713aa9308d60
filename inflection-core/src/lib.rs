//! Rule-table engine for English noun inflection
//!
//! Words are inflected by scanning an ordered table of compiled regex rules
//! and applying the *last* rule that matches. The tables are derived from
//! four base lists (suffix rules for each direction, irregular pairs and
//! uncountable words) by mechanically expanding every base rule into its
//! case variants.
//!
//! # Example
//!
//! ```rust
//! use inflection_core::{build_rule_tables, Rule, RuleSources};
//!
//! let sources = RuleSources {
//!     plurals: vec![Rule::new("([a-z])$", "${1}s")],
//!     singulars: vec![Rule::new("", "s$")],
//!     irregulars: vec![Rule::new("child", "children")],
//!     uncountables: vec![Rule::new("sheep", "sheep")],
//! };
//!
//! let tables = build_rule_tables(&sources).unwrap();
//! assert_eq!(tables.pluralize.transform("Star"), "Stars");
//! assert_eq!(tables.pluralize.transform("child"), "children");
//! assert_eq!(tables.singularize.transform("CHILDREN"), "CHILD");
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod expand;
pub mod rule;
pub mod table;

// Re-export key types
pub use builder::{build_rule_tables, RuleTables};
pub use config::RuleSources;
pub use error::{InflectionError, Result};
pub use rule::{CompiledRule, Rule};
pub use table::{Direction, RuleTable};
