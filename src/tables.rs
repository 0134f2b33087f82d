//! Static lexical tables the engine consults besides the lexicon:
//! negation markers, interjections and the token → emotion map.
//!
//! Built-in defaults cover the common English cases. A TOML file can replace any
//! section; sections left out keep their defaults.
//!
//! ```toml
//! [negations]
//! words = ["not", "no", "never"]
//!
//! [interjections]
//! wow = "Positive"
//! oh = "Neutral"
//!
//! [emotions]
//! happy = "joy"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::emotion::EmotionLabel;
use crate::sentiment::Sentiment;

const DEFAULT_NEGATIONS: &[&str] = &[
    "not", "n't", "no", "never", "nothing", "barely", "hardly", "scarcely",
];

const DEFAULT_INTERJECTIONS: &[(&str, Sentiment)] = &[
    ("wow", Sentiment::Positive),
    ("yay", Sentiment::Positive),
    ("yayyy", Sentiment::Positive),
    ("yaay", Sentiment::Positive),
    ("oh", Sentiment::Neutral),
    ("ugh", Sentiment::Negative),
    ("ughh", Sentiment::Negative),
    ("shit", Sentiment::Negative),
    ("damn", Sentiment::Negative),
    ("crap", Sentiment::Negative),
    ("oops", Sentiment::Neutral),
];

const DEFAULT_EMOTIONS: &[(&str, EmotionLabel)] = &[
    ("happy", EmotionLabel::Joy),
    ("joy", EmotionLabel::Joy),
    ("amazing", EmotionLabel::Joy),
    ("excellent", EmotionLabel::Joy),
    ("great", EmotionLabel::Joy),
    ("surprise", EmotionLabel::Surprise),
    ("surprised", EmotionLabel::Surprise),
    ("wow", EmotionLabel::Surprise),
    ("whoa", EmotionLabel::Surprise),
    ("oh", EmotionLabel::Surprise),
    ("sad", EmotionLabel::Sadness),
    ("sadness", EmotionLabel::Sadness),
    ("depressed", EmotionLabel::Sadness),
    ("disappoint", EmotionLabel::Sadness),
    ("disappointed", EmotionLabel::Sadness),
    ("disappointment", EmotionLabel::Sadness),
    ("sucks", EmotionLabel::Sadness),
    ("shit", EmotionLabel::Sadness),
    ("shitty", EmotionLabel::Sadness),
    ("angry", EmotionLabel::Anger),
    ("furious", EmotionLabel::Anger),
    ("hate", EmotionLabel::Anger),
    ("fear", EmotionLabel::Fear),
    ("scared", EmotionLabel::Fear),
    ("terrified", EmotionLabel::Fear),
    ("horrible", EmotionLabel::Anger),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineTables {
    pub negations: HashSet<String>,
    pub interjections: HashMap<String, Sentiment>,
    pub emotions: HashMap<String, EmotionLabel>,
}

impl Default for EngineTables {
    fn default() -> Self {
        Self {
            negations: DEFAULT_NEGATIONS.iter().map(|w| w.to_string()).collect(),
            interjections: DEFAULT_INTERJECTIONS
                .iter()
                .map(|(w, s)| (w.to_string(), *s))
                .collect(),
            emotions: DEFAULT_EMOTIONS
                .iter()
                .map(|(w, e)| (w.to_string(), *e))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TablesFile {
    #[serde(default)]
    negations: Option<NegationsSection>,
    #[serde(default)]
    interjections: Option<HashMap<String, Sentiment>>,
    #[serde(default)]
    emotions: Option<HashMap<String, EmotionLabel>>,
}

#[derive(Debug, Deserialize)]
struct NegationsSection {
    words: Vec<String>,
}

impl EngineTables {
    /// Parse a TOML override on top of the defaults.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let file: TablesFile = toml::from_str(toml_str)?;
        let mut tables = Self::default();

        if let Some(n) = file.negations {
            tables.negations = n.words.into_iter().map(|w| w.to_lowercase()).collect();
        }
        if let Some(i) = file.interjections {
            tables.interjections = i.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect();
        }
        if let Some(e) = file.emotions {
            tables.emotions = e.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect();
        }
        Ok(tables)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read engine tables at {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid engine tables in {}", path.display()))
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn interjection(&self, word: &str) -> Option<Sentiment> {
        self.interjections.get(word).copied()
    }

    pub fn emotion(&self, word: &str) -> Option<EmotionLabel> {
        self.emotions.get(word).copied()
    }
}
