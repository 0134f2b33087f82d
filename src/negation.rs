//! One-token negation lookback.
//!
//! A token is negated when the raw token right before it, stripped to letters,
//! is a negation marker. No wider scope and no double negation.

use crate::tables::EngineTables;
use crate::tokenize::strip_alpha;

pub fn is_negated(tables: &EngineTables, raw_tokens: &[&str], i: usize) -> bool {
    if i == 0 {
        return false;
    }
    raw_tokens
        .get(i - 1)
        .is_some_and(|prev| tables.is_negation(&strip_alpha(prev)))
}
