use crate::rows::{health_handler, table_rows_handler};
use crate::state::{AppState, HEALTH_PATH};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    let cors_permissive = state.cors_permissive;
    let app = Router::new()
        .route(&state.rows_path, get(table_rows_handler))
        .route(HEALTH_PATH, get(health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());
    if cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
