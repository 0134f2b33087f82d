use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::sentiment::Sentiment;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and publish the lexicon size.
    pub fn init(lexicon_entries: usize) -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;

        gauge!("sentiment_lexicon_entries").set(lexicon_entries as f64);

        Ok(Self { handle })
    }

    /// `GET /metrics` in the Prometheus text format, meant to be merged into
    /// the API router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/metrics", get(render_metrics))
            .with_state(self.handle.clone())
    }
}

async fn render_metrics(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}

// Without an installed recorder these are no-ops, so tests need no setup.
pub fn record_analysis(sentiment: Sentiment) {
    let label = match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Negative => "negative",
        Sentiment::Neutral => "neutral",
    };
    counter!("sentiment_analyses_total", "sentiment" => label).increment(1);
}

pub fn record_empty_input() {
    counter!("sentiment_empty_input_total").increment(1);
}
