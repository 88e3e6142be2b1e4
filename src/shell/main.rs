use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use security_registry::shell::config::AppConfig;
use security_registry::shell::state::AppState;
use security_registry::shell::{graphql, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    // In-memory deps for now
    let state = AppState::in_memory(config.list_limits);
    let schema = graphql::build_schema(state.clone());

    let app = http::router(state)
        .merge(graphql::routes(schema))
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!(%addr, "seized item registry listening, GraphQL endpoint at /gql");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
