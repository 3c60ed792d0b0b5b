use clap::Parser;
use opamp_server::config::{Cli, Settings};
use opamp_server::error::ServerError;
use opamp_server::state::AppState;
use opamp_server::{api, transport};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli)?;
    let bind_addr = settings.bind_addr.clone();

    let pool = settings.database.connect().await?;
    let state = AppState::new(pool, settings);

    let app = axum::Router::new()
        .merge(api::router())
        .merge(transport::router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!(%bind_addr, "starting opamp control plane");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(ServerError::Io)?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Io)?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
