use std::collections::HashMap;

use crate::services::error::ConfigurationError;

/// Look-alikes shipped with the bot. Digits, symbols and the accented
/// variants French and English speakers reach for first.
const BUILTIN_CLASSES: &[(char, &[char])] = &[
    ('a', &['4', '@', 'à', 'á', 'â', 'ä']),
    ('e', &['3', 'é', 'è', 'ê', 'ë']),
    ('i', &['1', '!', 'í', 'ì', 'î', 'ï']),
    ('o', &['0', 'ó', 'ò', 'ô', 'ö']),
    ('u', &['ú', 'ù', 'û', 'ü']),
    ('s', &['$', '5']),
];

/// Characters the pattern compiler already tolerates between letters.
const SEPARATORS: &[char] = &['.', '-'];

#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    classes: HashMap<char, Vec<char>>,
}

impl SubstitutionTable {
    pub fn new<I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (char, Vec<char>)>,
    {
        let mut classes = HashMap::new();

        for (base, lookalikes) in entries {
            if !base.is_alphabetic() || !base.is_lowercase() {
                return Err(ConfigurationError::MalformedSubstitution {
                    base,
                    reason: "base must be a lowercase letter".to_string(),
                });
            }
            if classes.contains_key(&base) {
                return Err(ConfigurationError::ConflictingSubstitution { base });
            }

            let mut class: Vec<char> = Vec::with_capacity(lookalikes.len());
            for c in lookalikes {
                if c.is_whitespace() || SEPARATORS.contains(&c) {
                    return Err(ConfigurationError::MalformedSubstitution {
                        base,
                        reason: format!("{:?} is a separator, not a look-alike", c),
                    });
                }
                if c != base && !class.contains(&c) {
                    class.push(c);
                }
            }
            if class.is_empty() {
                return Err(ConfigurationError::MalformedSubstitution {
                    base,
                    reason: "no look-alikes given".to_string(),
                });
            }

            classes.insert(base, class);
        }

        Ok(Self { classes })
    }

    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::new(
            BUILTIN_CLASSES
                .iter()
                .map(|(base, lookalikes)| (*base, lookalikes.to_vec())),
        )
    }

    /// Look-alikes for `letter`, matched on its lowercase form.
    pub fn class_for(&self, letter: char) -> Option<&[char]> {
        let mut lower = letter.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => self.classes.get(&l).map(Vec::as_slice),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
