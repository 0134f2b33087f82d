//! Emotion labels and the classifier that picks one for a matched token.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sentiment::Sentiment;
use crate::tables::EngineTables;
use crate::tokenize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 5] = [
        EmotionLabel::Joy,
        EmotionLabel::Anger,
        EmotionLabel::Sadness,
        EmotionLabel::Fear,
        EmotionLabel::Surprise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Joy => "joy",
            EmotionLabel::Anger => "anger",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Surprise => "surprise",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the emotion for a matched token:
/// 1. emotion map entry for the normalized token,
/// 2. emotion map entry for the normalized fuzzy-matched lexicon key,
/// 3. polarity fallback (Positive -> joy, Negative -> anger, Neutral -> none).
pub fn emotion_for(
    tables: &EngineTables,
    normalized: &str,
    fuzzy_key: Option<&str>,
    sentiment: Sentiment,
) -> Option<EmotionLabel> {
    if let Some(e) = tables.emotion(normalized) {
        return Some(e);
    }
    if let Some(e) = fuzzy_key.and_then(|k| tables.emotion(&normalize(k))) {
        return Some(e);
    }
    match sentiment {
        Sentiment::Positive => Some(EmotionLabel::Joy),
        Sentiment::Negative => Some(EmotionLabel::Anger),
        Sentiment::Neutral => None,
    }
}

/// Per-request emotion counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionCounts([u32; 5]);

impl EmotionCounts {
    pub fn increment(&mut self, label: EmotionLabel) {
        self.0[label.index()] += 1;
    }

    pub fn get(&self, label: EmotionLabel) -> u32 {
        self.0[label.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Share of each emotion; all zero when nothing was counted.
    pub fn distribution(&self) -> EmotionScores {
        let sum = self.total();
        if sum == 0 {
            return EmotionScores::default();
        }
        let share = |l: EmotionLabel| f64::from(self.get(l)) / f64::from(sum);
        EmotionScores {
            joy: share(EmotionLabel::Joy),
            anger: share(EmotionLabel::Anger),
            sadness: share(EmotionLabel::Sadness),
            fear: share(EmotionLabel::Fear),
            surprise: share(EmotionLabel::Surprise),
        }
    }
}

/// Normalized emotion distribution. Serialized with all five keys present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: f64,
    pub anger: f64,
    pub sadness: f64,
    pub fear: f64,
    pub surprise: f64,
}

impl EmotionScores {
    pub fn get(&self, label: EmotionLabel) -> f64 {
        match label {
            EmotionLabel::Joy => self.joy,
            EmotionLabel::Anger => self.anger,
            EmotionLabel::Sadness => self.sadness,
            EmotionLabel::Fear => self.fear,
            EmotionLabel::Surprise => self.surprise,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        EmotionLabel::ALL.into_iter().map(move |l| (l, self.get(l)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }
}
