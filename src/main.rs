//! Sentiment Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the scoring engine, history log and metrics.

use lexicon_sentiment::{api, config::AppConfig, metrics::Metrics};
use shuttle_axum::ShuttleAxum;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs by default, JSON when `LOG_FORMAT=json`.
/// `try_init` because the Shuttle runtime may already have installed a subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lexicon_sentiment=info,warn"));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::from_env();
    let state = api::AppState::from_config(&cfg)?;

    let metrics = Metrics::init(state.engine.lexicon().len())?;
    let router = api::router(state).merge(metrics.router());

    info!(
        model_version = %cfg.model_version,
        history = %cfg.history_path.display(),
        "sentiment service ready"
    );

    Ok(router.into())
}
