//! Turns banned words into tolerant regular expressions.
//!
//! Every letter with a substitution class becomes a character class holding
//! the letter and its look-alikes. Letters may be padded with spaces, dots or
//! hyphens, and the whole word is anchored on half word boundaries so "bad"
//! does not fire inside "badge" while "$hit" or "h!" still match even though
//! the look-alike at the edge is not a word character.

use regex::{Matches, Regex, RegexBuilder};

use crate::services::error::ConfigurationError;
use crate::services::substitutions::SubstitutionTable;

/// Zero or more of whitespace, period or hyphen between two letters.
const SEPARATOR: &str = r"[.\s-]*";

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    word: String,
    regex: Regex,
}

impl CompiledPattern {
    /// The canonical banned word this pattern was built from.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn find_iter<'t>(&self, text: &'t str) -> Matches<'_, 't> {
        self.regex.find_iter(text)
    }
}

/// Regex source for `word`, without compiling it.
pub fn pattern_source(word: &str, table: &SubstitutionTable) -> Result<String, ConfigurationError> {
    if word.is_empty() {
        return Err(ConfigurationError::EmptyWord);
    }

    let fragments: Vec<String> = word
        .chars()
        .map(|c| match table.class_for(c) {
            Some(lookalikes) => {
                let mut class = String::from("[");
                for member in c.to_lowercase().chain(lookalikes.iter().copied()) {
                    class.push_str(&regex::escape(&member.to_string()));
                }
                class.push(']');
                class
            }
            None => regex::escape(&c.to_string()),
        })
        .collect();

    Ok(format!(
        r"\b{{start-half}}{}\b{{end-half}}",
        fragments.join(SEPARATOR)
    ))
}

pub fn compile(word: &str, table: &SubstitutionTable) -> Result<CompiledPattern, ConfigurationError> {
    let source = pattern_source(word, table)?;
    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigurationError::PatternCompile {
            word: word.to_string(),
            source,
        })?;

    Ok(CompiledPattern {
        word: word.to_string(),
        regex,
    })
}
