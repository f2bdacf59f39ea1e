use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use billable_time::shell::config::read_config;
use billable_time::shell::http::router;
use billable_time::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = read_config().context("reading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    fmt().with_env_filter(filter).init();

    // In-memory adapters; state is lost on restart.
    let state = AppState::in_memory(&settings.application.topic);
    let app = router(state);

    let addr = settings.application.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on http://{addr}, GraphQL at /gql");
    axum::serve(listener, app).await?;
    Ok(())
}
