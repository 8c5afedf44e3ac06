pub mod handlers;
pub mod types;

use crate::{config::Config, dataset, engine::Engine, responses::ResponseTable, Result};
use axum::{routing::post, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the router around an already-trained engine.
pub fn app(engine: Arc<Engine>) -> Router {
    let app_state = handlers::AppState { engine };

    Router::new()
        .route("/ask", post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialization phase: everything here is fatal on failure
    let examples = dataset::load(&config.dataset.path)?;
    let responses = ResponseTable::new(&config.responses)?;
    let engine = Engine::fit(&examples, responses)?;

    let app = app(Arc::new(engine));

    // Serving phase
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
