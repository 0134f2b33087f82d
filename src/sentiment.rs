//! Three-way verdict shared by the matcher, the tables and the final record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::PolarityLabel;

/// Overall verdict of a match or an analysis. `Neutral` only comes from
/// interjections or from a balanced/empty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl From<PolarityLabel> for Sentiment {
    fn from(label: PolarityLabel) -> Self {
        match label {
            PolarityLabel::Positive => Sentiment::Positive,
            PolarityLabel::Negative => Sentiment::Negative,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}
