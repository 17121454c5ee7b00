pub mod handlers;
pub mod types;

use crate::{
    config::Config,
    veo::{VeoClient, VideoGenerator},
    Result,
};
use axum::{routing::post, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/api/generate", post(handlers::generate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let generator: Option<Arc<dyn VideoGenerator>> = if config.veo.api_key.is_some() {
        Some(Arc::new(VeoClient::new(config.veo.clone())?))
    } else {
        warn!("GOOGLE_API_KEY not set, running in demo mode");
        None
    };

    let app_state = handlers::AppState {
        generator,
        demo_video_url: config.veo.demo_video_url.clone(),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
