use std::ops::Range;

use once_cell::sync::Lazy;
use rand::Rng;

use crate::services::patterns::CompiledPattern;

/// Wraps each censored span so it renders as inline code.
const MARKER: char = '`';

/// ASCII punctuation minus the marker itself.
static PUNCTUATION: Lazy<Vec<char>> = Lazy::new(|| {
    ('!'..='~')
        .filter(|c| c.is_ascii_punctuation() && *c != MARKER)
        .collect()
});

/// Byte ranges of every pattern hit in `text`, sorted and with overlapping or
/// touching ranges merged.
pub fn match_spans(text: &str, patterns: &[CompiledPattern]) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = patterns
        .iter()
        .flat_map(|p| p.find_iter(text).map(|m| m.range()))
        .filter(|r| !r.is_empty())
        .collect();
    spans.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Replaces every span matched by `patterns` with random punctuation of the
/// same length in characters, wrapped in backticks.
pub fn censor_with<R>(text: &str, patterns: &[CompiledPattern], rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let spans = match_spans(text, patterns);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + spans.len() * 2);
    let mut cursor = 0;

    for span in spans {
        result.push_str(&text[cursor..span.start]);
        result.push(MARKER);
        for _ in text[span.clone()].chars() {
            result.push(PUNCTUATION[rng.gen_range(0..PUNCTUATION.len())]);
        }
        result.push(MARKER);
        cursor = span.end;
    }

    result.push_str(&text[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::patterns::compile;
    use crate::services::substitutions::SubstitutionTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn patterns(words: &[&str]) -> Vec<CompiledPattern> {
        let table = SubstitutionTable::builtin().unwrap();
        words.iter().map(|w| compile(w, &table).unwrap()).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Splits censored output into (plain, censored) pieces.
    fn censored_pieces(output: &str) -> Vec<String> {
        output
            .split(MARKER)
            .enumerate()
            .filter(|(i, _)| i % 2 == 1)
            .map(|(_, s)| s.to_string())
            .collect()
    }

    #[test]
    fn alphabet_excludes_marker() {
        assert!(!PUNCTUATION.contains(&MARKER));
        assert_eq!(PUNCTUATION.len(), 31);
    }

    #[test]
    fn clean_text_is_untouched() {
        let p = patterns(&["bad"]);
        assert_eq!(censor_with("all good here", &p, &mut rng()), "all good here");
    }

    #[test]
    fn span_length_is_preserved() {
        let p = patterns(&["bad"]);
        let out = censor_with("you are b a d and b4d", &p, &mut rng());

        let pieces = censored_pieces(&out);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].chars().count(), "b a d".len());
        assert_eq!(pieces[1].chars().count(), "b4d".len());
        assert!(pieces
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_punctuation())));
        assert!(out.starts_with("you are `"));
        assert!(out.contains("` and `"));
        assert!(!out.contains("b4d"));
    }

    #[test]
    fn non_ascii_span_counts_characters() {
        let p = patterns(&["bad"]);
        let out = censor_with("bäd", &p, &mut rng());
        assert_eq!(out.chars().count(), 3 + 2);
        assert!(out.is_ascii());
    }

    #[test]
    fn overlapping_matches_merge_into_one_marker() {
        let p = patterns(&["bad", "bad word"]);
        let text = "such a bad word";
        let spans = match_spans(text, &p);
        assert_eq!(spans, vec![7..15]);

        let out = censor_with(text, &p, &mut rng());
        assert_eq!(out.matches(MARKER).count(), 2);
        assert_eq!(out.len(), text.len() + 2);
    }

    #[test]
    fn seeded_output_is_deterministic() {
        let p = patterns(&["bad"]);
        let a = censor_with("bad", &p, &mut rng());
        let b = censor_with("bad", &p, &mut rng());
        assert_eq!(a, b);
    }
}
