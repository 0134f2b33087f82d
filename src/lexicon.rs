//! # Lexicon
//! Immutable word → polarity dictionary, parsed from a `word:Label;word:Label` resource.
//!
//! - Blank entries are ignored.
//! - Entries without exactly two `:`-separated fields are skipped.
//! - Labels other than `Positive` / `Negative` are skipped.
//! - Duplicate words: the last entry wins.
//!
//! `load` never fails. A missing resource gives an empty lexicon (degraded mode);
//! reporting that is up to the caller.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use crate::tokenize::normalize;

/// Built-in lexicon shipped with the binary.
pub const EMBEDDED_LEXICON: &str = include_str!("../resources/sentiment_model.txt");

/// Polarity a lexicon entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityLabel {
    Positive,
    Negative,
}

impl FromStr for PolarityLabel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Self::Positive),
            "Negative" => Ok(Self::Negative),
            _ => Err(()),
        }
    }
}

/// Lexicon key prepared for fuzzy lookup.
#[derive(Debug, Clone)]
pub(crate) struct FuzzyKey {
    pub key: String,
    pub normalized: String,
    pub label: PolarityLabel,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: BTreeMap<String, PolarityLabel>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    // Lexical key order; the fuzzy matcher relies on it for tie-breaks.
    fuzzy_keys: Vec<FuzzyKey>,
}

impl Lexicon {
    /// Parse a lexicon resource. `None` yields an empty lexicon.
    pub fn load(source: Option<&str>) -> Self {
        let Some(raw) = source else {
            return Self::default();
        };

        let mut entries = BTreeMap::new();
        for entry in raw.split(';') {
            if entry.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = entry.split(':').collect();
            if parts.len() != 2 {
                continue;
            }
            let word = parts[0].trim();
            let Ok(label) = parts[1].trim().parse::<PolarityLabel>() else {
                continue;
            };
            if word.is_empty() {
                continue;
            }
            entries.insert(word.to_string(), label);
        }

        Self::from_entries(entries)
    }

    /// Lexicon built from the embedded default resource.
    pub fn embedded() -> Self {
        Self::load(Some(EMBEDDED_LEXICON))
    }

    /// Build directly from `(word, label)` pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, PolarityLabel)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(w, l)| (w.into(), l))
            .collect::<BTreeMap<_, _>>();
        Self::from_entries(entries)
    }

    fn from_entries(entries: BTreeMap<String, PolarityLabel>) -> Self {
        let mut positive = HashSet::new();
        let mut negative = HashSet::new();
        let mut fuzzy_keys = Vec::with_capacity(entries.len());

        for (word, &label) in &entries {
            match label {
                PolarityLabel::Positive => positive.insert(word.clone()),
                PolarityLabel::Negative => negative.insert(word.clone()),
            };
            let normalized = normalize(word);
            if !normalized.is_empty() {
                fuzzy_keys.push(FuzzyKey {
                    key: word.clone(),
                    normalized,
                    label,
                });
            }
        }

        Self {
            entries,
            positive,
            negative,
            fuzzy_keys,
        }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn label_of(&self, word: &str) -> Option<PolarityLabel> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in lexical order of the word.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PolarityLabel)> + '_ {
        self.entries.iter().map(|(w, l)| (w.as_str(), *l))
    }

    pub(crate) fn fuzzy_keys(&self) -> &[FuzzyKey] {
        &self.fuzzy_keys
    }
}
