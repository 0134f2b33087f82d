//! Token → sentiment matching.
//!
//! Order, first hit wins:
//! 1. direct lexicon membership (raw alpha form or normalized form),
//! 2. interjection table,
//! 3. fuzzy lexicon lookup by Levenshtein distance (`strsim::levenshtein`).
//!
//! Fuzzy acceptance: `distance <= max(1, len / 3)`. Ties on distance go to the
//! lexically smallest key.

use strsim::levenshtein;

use crate::lexicon::Lexicon;
use crate::sentiment::Sentiment;
use crate::tables::EngineTables;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub sentiment: Sentiment,
    /// Lexicon key that matched approximately; `None` for direct/interjection hits.
    pub fuzzy_key: Option<String>,
}

impl Match {
    fn exact(sentiment: Sentiment) -> Self {
        Self {
            sentiment,
            fuzzy_key: None,
        }
    }
}

pub fn match_token(
    lexicon: &Lexicon,
    tables: &EngineTables,
    normalized: &str,
    raw_alpha: &str,
) -> Option<Match> {
    if lexicon.is_positive(raw_alpha) || lexicon.is_positive(normalized) {
        return Some(Match::exact(Sentiment::Positive));
    }
    if lexicon.is_negative(raw_alpha) || lexicon.is_negative(normalized) {
        return Some(Match::exact(Sentiment::Negative));
    }

    if let Some(s) = tables.interjection(normalized) {
        return Some(Match::exact(s));
    }

    best_fuzzy_match(lexicon, normalized).map(|(key, sentiment)| Match {
        sentiment,
        fuzzy_key: Some(key),
    })
}

/// Length-scaled edit-distance budget.
pub fn fuzzy_threshold(token: &str) -> usize {
    (token.chars().count() / 3).max(1)
}

fn best_fuzzy_match(lexicon: &Lexicon, candidate: &str) -> Option<(String, Sentiment)> {
    if candidate.is_empty() {
        return None;
    }
    let threshold = fuzzy_threshold(candidate);
    let cand_len = candidate.chars().count();

    let mut best: Option<(usize, &str, Sentiment)> = None;
    for fk in lexicon.fuzzy_keys() {
        // Distance is at least the length gap; such keys can never be accepted.
        if fk.normalized.chars().count().abs_diff(cand_len) > threshold {
            continue;
        }
        let dist = levenshtein(candidate, &fk.normalized);
        if best.map_or(true, |(d, _, _)| dist < d) {
            best = Some((dist, fk.key.as_str(), fk.label.into()));
        }
    }

    best.filter(|(d, _, _)| *d <= threshold)
        .map(|(_, key, s)| (key.to_string(), s))
}
