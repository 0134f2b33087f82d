//! # Scoring Engine
//! Pure, testable pipeline that maps `text` → `AnalysisResult`.
//! No I/O, no shared mutable state; one `SentimentEngine` can serve any number
//! of concurrent requests.
//!
//! Per token: negation lookback → normalization → match → emotion. Negation flips
//! the polarity counter only, never the emotion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::emotion::{emotion_for, EmotionCounts, EmotionScores};
use crate::error::AnalyzeError;
use crate::lexicon::Lexicon;
use crate::matcher::match_token;
use crate::negation::is_negated;
use crate::sentiment::Sentiment;
use crate::tables::EngineTables;
use crate::tokenize::{normalize, strip_alpha, tokenize};

pub const DEFAULT_MODEL_VERSION: &str = "v0.0.5-MaxLexicon";

/// Bucket reported as the dominant emotion, derived from the polarity scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantEmotion {
    Positive,
    Negative,
    Neutral,
}

/// Scoring record, in the shape the history log and UI consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub model_version: String,
    pub positive_score: f64,
    pub negative_score: f64,
    pub emotions: EmotionScores,
    pub dominant_emotion: DominantEmotion,
    pub dominant_emotion_score: f64,
    /// Stamped by the caller at response time; the engine leaves it empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl AnalysisResult {
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }
}

/// Per-request counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreAccumulator {
    pub positive_count: u32,
    pub negative_count: u32,
    pub emotions: EmotionCounts,
}

impl ScoreAccumulator {
    fn record(&mut self, sentiment: Sentiment, negated: bool) {
        match (sentiment, negated) {
            (Sentiment::Positive, false) | (Sentiment::Negative, true) => {
                self.positive_count += 1
            }
            (Sentiment::Negative, false) | (Sentiment::Positive, true) => {
                self.negative_count += 1
            }
            (Sentiment::Neutral, _) => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.positive_count + self.negative_count
    }

    /// Turn raw counts into normalized scores.
    pub fn finalize(&self, model_version: &str) -> AnalysisResult {
        let total = self.total();
        let (positive_score, negative_score, sentiment) = if total > 0 {
            let p = f64::from(self.positive_count) / f64::from(total);
            let n = f64::from(self.negative_count) / f64::from(total);
            let s = match self.positive_count.cmp(&self.negative_count) {
                std::cmp::Ordering::Greater => Sentiment::Positive,
                std::cmp::Ordering::Less => Sentiment::Negative,
                std::cmp::Ordering::Equal => Sentiment::Neutral,
            };
            (p, n, s)
        } else {
            (0.0, 0.0, Sentiment::Neutral)
        };

        let (dominant_emotion, dominant_emotion_score) = if positive_score > negative_score {
            (DominantEmotion::Positive, positive_score)
        } else if negative_score > positive_score {
            (DominantEmotion::Negative, negative_score)
        } else {
            (
                DominantEmotion::Neutral,
                1.0 - (positive_score + negative_score),
            )
        };

        AnalysisResult {
            sentiment,
            model_version: model_version.to_string(),
            positive_score,
            negative_score,
            emotions: self.emotions.distribution(),
            dominant_emotion,
            dominant_emotion_score,
            timestamp: None,
        }
    }
}

/// Lexicon + tables, shared read-only across requests.
#[derive(Debug, Clone)]
pub struct SentimentEngine {
    lexicon: Arc<Lexicon>,
    tables: Arc<EngineTables>,
    model_version: String,
}

impl SentimentEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_tables(lexicon, EngineTables::default())
    }

    pub fn with_tables(lexicon: Lexicon, tables: EngineTables) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            tables: Arc::new(tables),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }

    pub fn model_version(mut self, version: impl Into<String>) -> Self {
        self.model_version = version.into();
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn tables(&self) -> &EngineTables {
        &self.tables
    }

    pub fn version(&self) -> &str {
        &self.model_version
    }

    /// Score `text`. Rejects empty or whitespace-only input.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzeError> {
        let acc = self.accumulate(text)?;
        Ok(acc.finalize(&self.model_version))
    }

    /// Run the token scan and return the raw counters.
    pub fn accumulate(&self, text: &str) -> Result<ScoreAccumulator, AnalyzeError> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        let raw_tokens = tokenize(text);
        let mut acc = ScoreAccumulator::default();

        for (i, raw) in raw_tokens.iter().enumerate() {
            let negated = is_negated(&self.tables, &raw_tokens, i);

            let alpha = strip_alpha(raw);
            if alpha.is_empty() {
                continue;
            }
            let normalized = normalize(&alpha);

            let Some(m) = match_token(&self.lexicon, &self.tables, &normalized, &alpha) else {
                continue;
            };

            acc.record(m.sentiment, negated);
            if let Some(e) = emotion_for(
                &self.tables,
                &normalized,
                m.fuzzy_key.as_deref(),
                m.sentiment,
            ) {
                acc.emotions.increment(e);
            }
        }

        tracing::debug!(
            tokens = raw_tokens.len(),
            positive = acc.positive_count,
            negative = acc.negative_count,
            "scored text"
        );
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::EmotionLabel;
    use crate::lexicon::PolarityLabel;

    fn engine(pairs: &[(&str, PolarityLabel)]) -> SentimentEngine {
        SentimentEngine::new(Lexicon::from_pairs(pairs.iter().map(|(w, l)| (*w, *l))))
    }

    #[test]
    fn negated_negative_counts_positive() {
        let e = engine(&[("bad", PolarityLabel::Negative)]);
        let acc = e.accumulate("never bad").unwrap();
        assert_eq!(acc.positive_count, 1);
        assert_eq!(acc.negative_count, 0);
    }

    #[test]
    fn negation_does_not_flip_emotion() {
        let e = engine(&[("happy", PolarityLabel::Positive)]);
        let acc = e.accumulate("not happy").unwrap();
        assert_eq!(acc.negative_count, 1);
        assert_eq!(acc.emotions.get(EmotionLabel::Joy), 1);
        assert_eq!(acc.emotions.get(EmotionLabel::Anger), 0);
    }

    #[test]
    fn neutral_interjection_counts_emotion_only() {
        let e = engine(&[]);
        let acc = e.accumulate("oh").unwrap();
        assert_eq!(acc.total(), 0);
        assert_eq!(acc.emotions.get(EmotionLabel::Surprise), 1);

        let r = acc.finalize(DEFAULT_MODEL_VERSION);
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.emotions.surprise, 1.0);
        assert_eq!(r.dominant_emotion, DominantEmotion::Neutral);
        assert_eq!(r.dominant_emotion_score, 1.0);
    }

    #[test]
    fn balanced_counts_are_neutral_with_zero_dominant_score() {
        let e = engine(&[("good", PolarityLabel::Positive), ("bad", PolarityLabel::Negative)]);
        let r = e.analyze("good bad").unwrap();
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.positive_score, 0.5);
        assert_eq!(r.negative_score, 0.5);
        assert_eq!(r.dominant_emotion, DominantEmotion::Neutral);
        assert_eq!(r.dominant_emotion_score, 0.0);
    }

    #[test]
    fn letterless_tokens_are_skipped() {
        let e = engine(&[("good", PolarityLabel::Positive)]);
        let acc = e.accumulate("42 good !!").unwrap();
        assert_eq!(acc.positive_count, 1);
    }

    #[test]
    fn blank_input_is_rejected() {
        let e = engine(&[]);
        assert_eq!(e.analyze(""), Err(AnalyzeError::EmptyInput));
        assert_eq!(e.analyze("  \n\t "), Err(AnalyzeError::EmptyInput));
    }

    #[test]
    fn punctuation_only_input_is_neutral() {
        let e = engine(&[("good", PolarityLabel::Positive)]);
        let r = e.analyze("?!").unwrap();
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.positive_score, 0.0);
    }

    #[test]
    fn result_serializes_camel_case_without_timestamp() {
        let e = engine(&[("good", PolarityLabel::Positive)]);
        let r = e.analyze("good").unwrap();
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["sentiment"], "Positive");
        assert_eq!(v["modelVersion"], DEFAULT_MODEL_VERSION);
        assert_eq!(v["dominantEmotion"], "positive");
        assert_eq!(v["dominantEmotionScore"], 1.0);
        assert_eq!(v["emotions"]["joy"], 1.0);
        assert!(v.get("timestamp").is_none());
    }

    #[test]
    fn custom_model_version_is_reported() {
        let e = engine(&[]).model_version("test-1");
        assert_eq!(e.analyze("hello").unwrap().model_version, "test-1");
    }
}
