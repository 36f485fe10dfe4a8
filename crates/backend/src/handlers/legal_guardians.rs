use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::shared::proxy::{forward_get, AppState, ProxyError};

/// GET /api/legal-guardians — full guardian roster, paging is done client-side.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ProxyError> {
    forward_get(&state.client, &state.config.upstream.legal_guardians).await
}
