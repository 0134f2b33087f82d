use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::AppConfig;
use crate::engine::{AnalysisResult, SentimentEngine};
use crate::error::AnalyzeError;
use crate::history::HistoryStore;
use crate::metrics;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SentimentEngine>,
    pub history: Arc<HistoryStore>,
    pub history_default_limit: Option<usize>,
}

impl AppState {
    pub fn new(engine: SentimentEngine, history: HistoryStore) -> Self {
        Self {
            engine: Arc::new(engine),
            history: Arc::new(history),
            history_default_limit: None,
        }
    }

    /// Build engine and history store from the resolved config.
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let engine = cfg.build_engine()?;
        let mut state = Self::new(engine, HistoryStore::new(&cfg.history_path));
        state.history_default_limit = cfg.history_default_limit;
        Ok(state)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .route("/history", get(history))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct ErrorResp {
    sentiment: &'static str,
    message: String,
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorResp>)> {
    let result = match state.engine.analyze(&body.text) {
        Ok(r) => r.stamped(Utc::now()),
        Err(e @ AnalyzeError::EmptyInput) => {
            metrics::record_empty_input();
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResp {
                    sentiment: "Error",
                    message: e.to_string(),
                }),
            ));
        }
    };

    metrics::record_analysis(result.sentiment);

    // History is best-effort; a failed append never fails the request.
    if let Err(e) = state.history.append(&result) {
        warn!(path = %state.history.path().display(), error = %e, "history append failed");
    }

    Ok(Json(result))
}

#[derive(Deserialize)]
struct HistoryQuery {
    limit: Option<i64>,
}

async fn history(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Json<Vec<Value>> {
    let limit = q
        .limit
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .or(state.history_default_limit);

    match state.history.read_last(limit) {
        Ok(rows) => Json(rows),
        Err(e) => {
            warn!(path = %state.history.path().display(), error = %e, "history read failed");
            Json(Vec::new())
        }
    }
}
