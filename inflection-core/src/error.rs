//! Error types for rule compilation and rule data loading

use thiserror::Error;

/// Errors raised while turning rule data into compiled rule tables
///
/// None of these can be triggered by the words being inflected; they only
/// surface from defects in the rule data itself.
#[derive(Error, Debug)]
pub enum InflectionError {
    /// A rule pattern is not a valid regular expression
    #[error("failed to compile rule pattern `{pattern}`: {source}")]
    PatternCompile {
        /// The offending pattern text
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Rule data failed validation
    #[error("invalid rule data: {0}")]
    InvalidConfig(String),

    /// Rule data could not be deserialized
    #[error("failed to parse rule data: {0}")]
    Parse(String),
}

/// Result type for rule table operations
pub type Result<T> = std::result::Result<T, InflectionError>;
