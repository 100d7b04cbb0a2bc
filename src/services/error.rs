use thiserror::Error;

/// Construction-time failures. A filter that fails to build is never handed
/// out, so these never surface while matching.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("banned word list is empty after dropping blank entries")]
    EmptyWordList,

    #[error("cannot compile a pattern for an empty word")]
    EmptyWord,

    #[error("malformed substitution entry for '{base}': {reason}")]
    MalformedSubstitution { base: char, reason: String },

    #[error("substitution table lists '{base}' more than once")]
    ConflictingSubstitution { base: char },

    #[error("failed to compile pattern for '{word}': {source}")]
    PatternCompile {
        word: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to compile pattern set: {0}")]
    PatternSet(#[source] regex::Error),
}
