use std::collections::HashSet;

use log::Level;
use rand::Rng;
use regex::{RegexSet, RegexSetBuilder};

use crate::services::censor;
use crate::services::diagnostics::DiagnosticSink;
use crate::services::error::ConfigurationError;
use crate::services::normalizer::normalize;
use crate::services::patterns::{self, CompiledPattern};
use crate::services::stems::{Language, StemIndex};
use crate::services::substitutions::SubstitutionTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    /// Carries the canonical banned word, not the text that triggered it.
    Matched(String),
}

impl MatchResult {
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::NoMatch => None,
            Self::Matched(word) => Some(word),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Banned-word detector. Built once from the word list and read-only
/// afterwards, so a single instance can be shared across threads.
#[derive(Debug)]
pub struct WordFilter {
    words: Vec<String>,
    patterns: Vec<CompiledPattern>,
    pattern_set: RegexSet,
    stem_indices: Vec<StemIndex>,
}

impl WordFilter {
    pub fn new<I, S>(
        words: I,
        table: &SubstitutionTable,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (position, raw) in words.into_iter().enumerate() {
            let word = raw.as_ref().trim().to_lowercase();
            if word.is_empty() {
                sink.report(
                    Level::Warn,
                    &format!("skipping blank banned word at position {}", position),
                );
                continue;
            }
            if !seen.insert(word.clone()) {
                sink.report(Level::Debug, &format!("skipping duplicate banned word '{}'", word));
                continue;
            }
            canonical.push(word);
        }

        if canonical.is_empty() {
            return Err(ConfigurationError::EmptyWordList);
        }

        let patterns = canonical
            .iter()
            .map(|word| patterns::compile(word, table))
            .collect::<Result<Vec<_>, _>>()?;

        let pattern_set = RegexSetBuilder::new(patterns.iter().map(CompiledPattern::as_str))
            .case_insensitive(true)
            .build()
            .map_err(ConfigurationError::PatternSet)?;

        let stem_indices = Language::ALL
            .iter()
            .map(|lang| StemIndex::build(*lang, canonical.iter().map(String::as_str)))
            .collect();

        sink.report(
            Level::Info,
            &format!(
                "word filter ready: {} banned words, {} substitution classes",
                canonical.len(),
                table.len()
            ),
        );

        Ok(Self {
            words: canonical,
            patterns,
            pattern_set,
            stem_indices,
        })
    }

    pub fn with_builtin_table<I, S>(words: I, sink: &dyn DiagnosticSink) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = SubstitutionTable::builtin()?;
        Self::new(words, &table, sink)
    }

    /// Returns the first banned word found in `text`.
    ///
    /// Patterns run on the raw text first, in list order. Only if none hits
    /// is the text normalized and each token looked up by its English and
    /// French stems.
    pub fn find_banned_word(&self, text: &str) -> MatchResult {
        if let Some(idx) = self.pattern_set.matches(text).iter().next() {
            return MatchResult::Matched(self.patterns[idx].word().to_string());
        }

        for token in normalize(text).split_whitespace() {
            for index in &self.stem_indices {
                if let Some(word) = index.lookup(token) {
                    return MatchResult::Matched(word.to_string());
                }
            }
        }

        MatchResult::NoMatch
    }

    pub fn censor(&self, text: &str) -> String {
        self.censor_with(text, &mut rand::thread_rng())
    }

    pub fn censor_with<R>(&self, text: &str, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        censor::censor_with(text, &self.patterns, rng)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
