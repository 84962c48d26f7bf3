use std::sync::Arc;

use mindful_api::{
    api::{create_router, AppState},
    config::Config,
    services::{
        catalog, providers::YouTubeProvider, CsvFeedbackLedger, FeedbackLedger,
        InMemoryFeedbackLedger, Recommender,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mindful_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let recommender = Recommender::new(catalog::load())?;

    let ledger: Arc<dyn FeedbackLedger> = if config.feedback_path.is_empty() {
        tracing::warn!("FEEDBACK_PATH is empty, feedback will not survive a restart");
        Arc::new(InMemoryFeedbackLedger::new())
    } else {
        tracing::info!(path = %config.feedback_path, "Using CSV feedback ledger");
        Arc::new(CsvFeedbackLedger::new(&config.feedback_path))
    };

    let mut state = AppState::new(recommender, ledger)
        .with_default_k(config.default_k)
        .with_external_result_limit(config.external_result_limit);

    match config.youtube_api_key.clone().filter(|key| !key.is_empty()) {
        Some(api_key) => {
            tracing::info!("YouTube search enabled");
            state = state.with_search_provider(Arc::new(YouTubeProvider::new(
                api_key,
                config.youtube_api_url.clone(),
            )));
        }
        None => tracing::info!("No YouTube API key, serving catalog results only"),
    }

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
