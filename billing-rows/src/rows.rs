use crate::records::BillingRecord;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// GET handler for the billing rows. Always 200 with the full list.
pub async fn table_rows_handler(
    State(state): State<Arc<AppState>>,
) -> Json<&'static [BillingRecord]> {
    let records = state.provider.list_records();
    debug!("Returning {} billing rows", records.len());
    Json(records)
}

// Liveness probe for load balancers; touches no state.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
