// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod history;
pub mod lexicon;
pub mod matcher;
pub mod metrics;
pub mod negation;
pub mod sentiment;
pub mod tables;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::emotion::{EmotionLabel, EmotionScores};
pub use crate::engine::{AnalysisResult, DominantEmotion, ScoreAccumulator, SentimentEngine};
pub use crate::error::AnalyzeError;
pub use crate::lexicon::{Lexicon, PolarityLabel};
pub use crate::sentiment::Sentiment;
pub use crate::tables::EngineTables;
