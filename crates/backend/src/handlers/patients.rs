use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::proxy::{forward_get_with_query, AppState, ProxyError};

#[derive(Debug, Deserialize)]
pub struct PatientsQuery {
    pub status: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// GET /api/patients — paginated patient summaries filtered by status.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PatientsQuery>,
) -> Result<Json<Value>, ProxyError> {
    let params = query_params(&query);
    forward_get_with_query(&state.client, &state.config.upstream.patients, &params).await
}

fn query_params(query: &PatientsQuery) -> [(&'static str, String); 3] {
    [
        (
            "status",
            query.status.clone().unwrap_or_else(|| "ACTIVE".into()),
        ),
        ("page", query.page.unwrap_or(1).to_string()),
        ("page_size", query.page_size.unwrap_or(10).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_url(query: &PatientsQuery) -> reqwest::Url {
        reqwest::Client::new()
            .get("http://u/patients")
            .query(&query_params(query))
            .build()
            .unwrap()
            .url()
            .clone()
    }

    #[test]
    fn url_carries_all_query_params() {
        let url = upstream_url(&PatientsQuery {
            status: Some("INACTIVE".into()),
            page: Some(3),
            page_size: Some(20),
        });
        assert_eq!(url.query(), Some("status=INACTIVE&page=3&page_size=20"));
    }

    #[test]
    fn url_defaults_match_first_active_page() {
        let url = upstream_url(&PatientsQuery {
            status: None,
            page: None,
            page_size: None,
        });
        assert_eq!(url.query(), Some("status=ACTIVE&page=1&page_size=10"));
    }

    #[test]
    fn status_with_query_metacharacters_stays_one_parameter() {
        let url = upstream_url(&PatientsQuery {
            status: Some("ACTIVE&page_size=1000".into()),
            page: None,
            page_size: None,
        });
        // The separator characters are encoded into the status value.
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs[0],
            ("status".to_string(), "ACTIVE&page_size=1000".to_string())
        );
        let page_sizes: Vec<_> = pairs.iter().filter(|(k, _)| k == "page_size").collect();
        assert_eq!(page_sizes, vec![&("page_size".to_string(), "10".to_string())]);
    }
}
