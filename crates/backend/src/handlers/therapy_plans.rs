use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::therapy_plan::TherapyPlanDraft;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::proxy::{forward_get, forward_post, AppState, ProxyError};

#[derive(Debug, Deserialize)]
pub struct PlansQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// GET /api/therapy-plans — paginated plans, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PlansQuery>,
) -> Result<Json<Value>, ProxyError> {
    let url = build_list_url(&state.config.upstream.therapy_plans, &query);
    forward_get(&state.client, &url).await
}

/// POST /api/therapy-plans — register a new plan.
///
/// The draft is deserialized into the shared contract type before
/// forwarding, so malformed schedules are rejected here with a 422
/// instead of reaching the upstream service.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<TherapyPlanDraft>,
) -> Result<Json<Value>, ProxyError> {
    let body = serde_json::to_value(&draft).map_err(|err| ProxyError::Upstream {
        status: axum::http::StatusCode::UNPROCESSABLE_ENTITY,
        message: err.to_string(),
    })?;
    forward_post(&state.client, &state.config.upstream.therapy_plans, &body).await
}

fn build_list_url(base: &str, query: &PlansQuery) -> String {
    format!(
        "{}?page={}&size={}",
        base,
        query.page.unwrap_or(1),
        query.size.unwrap_or(10)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_defaults_to_first_page_of_ten() {
        let query = PlansQuery {
            page: None,
            size: None,
        };
        assert_eq!(
            build_list_url("http://u/therapy-plans", &query),
            "http://u/therapy-plans?page=1&size=10"
        );
    }

    #[test]
    fn list_url_carries_explicit_paging() {
        let query = PlansQuery {
            page: Some(4),
            size: Some(50),
        };
        assert_eq!(
            build_list_url("http://u/therapy-plans", &query),
            "http://u/therapy-plans?page=4&size=50"
        );
    }
}
