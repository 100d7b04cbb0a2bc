use std::collections::HashMap;
use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    fn algorithm(self) -> Algorithm {
        match self {
            Self::English => Algorithm::English,
            Self::French => Algorithm::French,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::French => write!(f, "fr"),
        }
    }
}

/// Stem → canonical banned word for one language.
pub struct StemIndex {
    language: Language,
    stemmer: Stemmer,
    stems: HashMap<String, String>,
}

impl StemIndex {
    /// Builds the index from lowercase banned words. When two words share a
    /// stem, the one listed first keeps it.
    pub fn build<'a, I>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let stemmer = Stemmer::create(language.algorithm());
        let mut stems = HashMap::new();

        for word in words {
            let stem = stemmer.stem(word).into_owned();
            stems.entry(stem).or_insert_with(|| word.to_string());
        }

        Self {
            language,
            stemmer,
            stems,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Canonical banned word whose stem equals the stem of `token`.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.stems.get(self.stemmer.stem(token).as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }
}

impl fmt::Debug for StemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemIndex")
            .field("language", &self.language)
            .field("stems", &self.stems)
            .finish()
    }
}
