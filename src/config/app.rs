// src/config/app.rs
use anyhow::Context;
use std::{env, fs, path::PathBuf};
use tracing::{info, warn};

use crate::engine::{SentimentEngine, DEFAULT_MODEL_VERSION};
use crate::history::DEFAULT_HISTORY_PATH;
use crate::lexicon::{Lexicon, EMBEDDED_LEXICON};
use crate::tables::EngineTables;

pub const ENV_LEXICON_PATH: &str = "LEXICON_PATH";
pub const ENV_ENGINE_TABLES_PATH: &str = "ENGINE_TABLES_PATH";
pub const ENV_HISTORY_PATH: &str = "HISTORY_PATH";
pub const ENV_MODEL_VERSION: &str = "MODEL_VERSION";
pub const ENV_HISTORY_DEFAULT_LIMIT: &str = "HISTORY_DEFAULT_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// External lexicon resource; `None` means the embedded default.
    pub lexicon_path: Option<PathBuf>,
    /// Optional TOML override for negations/interjections/emotions.
    pub tables_path: Option<PathBuf>,
    pub history_path: PathBuf,
    pub model_version: String,
    /// Applied by `GET /history` when the request has no positive `limit`.
    pub history_default_limit: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            tables_path: None,
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            history_default_limit: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            lexicon_path: non_empty_var(ENV_LEXICON_PATH).map(PathBuf::from),
            tables_path: non_empty_var(ENV_ENGINE_TABLES_PATH).map(PathBuf::from),
            history_path: non_empty_var(ENV_HISTORY_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.history_path),
            model_version: non_empty_var(ENV_MODEL_VERSION).unwrap_or(defaults.model_version),
            history_default_limit: non_empty_var(ENV_HISTORY_DEFAULT_LIMIT)
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|&n| n > 0),
        }
    }

    /// Read the lexicon resource. Never fails: an unreadable file degrades to an
    /// empty lexicon with a warning.
    pub fn load_lexicon(&self) -> Lexicon {
        let lexicon = match &self.lexicon_path {
            None => Lexicon::load(Some(EMBEDDED_LEXICON)),
            Some(path) => match fs::read_to_string(path) {
                Ok(raw) => Lexicon::load(Some(&raw)),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "lexicon resource unreadable; running with an empty lexicon"
                    );
                    Lexicon::load(None)
                }
            },
        };

        if lexicon.is_empty() {
            warn!("lexicon is empty; every analysis will come out Neutral");
        } else {
            info!(entries = lexicon.len(), "lexicon loaded");
        }
        lexicon
    }

    pub fn load_tables(&self) -> anyhow::Result<EngineTables> {
        match &self.tables_path {
            None => Ok(EngineTables::default()),
            Some(path) => EngineTables::load_from_file(path),
        }
    }

    pub fn build_engine(&self) -> anyhow::Result<SentimentEngine> {
        let tables = self.load_tables().context("loading engine tables")?;
        let lexicon = self.load_lexicon();
        Ok(SentimentEngine::with_tables(lexicon, tables).model_version(&self.model_version))
    }
}
