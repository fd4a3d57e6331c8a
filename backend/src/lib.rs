mod config;
mod error;
mod relay;
mod state;

pub use crate::config::{DEFAULT_COMPLETIONS_URL, RelayConfig};
pub use crate::error::RelayError;
pub use crate::state::AppState;

use crate::relay::relay_chat;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub fn init(router: Router<AppState>, config: RelayConfig) -> Router<()> {
    tracing::info!("Relaying completions to {}", config.completions_url);
    let state = AppState::new(config);

    router
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/chat", post(relay_chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
