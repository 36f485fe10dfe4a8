use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::shared::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Arc<Config>,
}

/// Failure while relaying a request to an upstream clinic service.
///
/// Upstream rejections keep their original status code; transport-level
/// failures (DNS, refused connection, malformed body) surface as 502.
/// Either way the client receives an `{"error": "..."}` body.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProxyError::Upstream { status, message } => (status, message),
            ProxyError::Transport(err) => (
                StatusCode::BAD_GATEWAY,
                format!("upstream request failed: {err}"),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn forward_get(client: &reqwest::Client, url: &str) -> Result<Json<Value>, ProxyError> {
    tracing::debug!("proxy GET {}", url);
    let response = client.get(url).send().await?;
    read_upstream(response).await
}

/// GET with query parameters appended by reqwest, so values are
/// percent-encoded and cannot smuggle extra pairs into the upstream URL.
pub async fn forward_get_with_query(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<Json<Value>, ProxyError> {
    tracing::debug!("proxy GET {}", url);
    let response = client.get(url).query(query).send().await?;
    read_upstream(response).await
}

pub async fn forward_post(
    client: &reqwest::Client,
    url: &str,
    body: &Value,
) -> Result<Json<Value>, ProxyError> {
    tracing::debug!("proxy POST {}", url);
    let response = client.post(url).json(body).send().await?;
    read_upstream(response).await
}

async fn read_upstream(response: reqwest::Response) -> Result<Json<Value>, ProxyError> {
    let status = response.status();
    if !status.is_success() {
        let message = upstream_error_message(status, response.json::<Value>().await.ok());
        return Err(ProxyError::Upstream {
            status: convert_status(status),
            message,
        });
    }
    let body = response.json::<Value>().await?;
    Ok(Json(body))
}

/// Prefer the upstream's own error text when its body carries one.
fn upstream_error_message(status: reqwest::StatusCode, body: Option<Value>) -> String {
    body.as_ref()
        .and_then(|b| b.get("error").or_else(|| b.get("message")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

fn convert_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_error_field() {
        let body = json!({ "error": "patient service offline" });
        let msg = upstream_error_message(reqwest::StatusCode::SERVICE_UNAVAILABLE, Some(body));
        assert_eq!(msg, "patient service offline");
    }

    #[test]
    fn error_message_falls_back_to_message_field() {
        let body = json!({ "message": "not found" });
        let msg = upstream_error_message(reqwest::StatusCode::NOT_FOUND, Some(body));
        assert_eq!(msg, "not found");
    }

    #[test]
    fn error_message_falls_back_to_status_code() {
        let msg = upstream_error_message(reqwest::StatusCode::BAD_GATEWAY, None);
        assert_eq!(msg, "HTTP 502");

        let body = json!({ "detail": "something else" });
        let msg = upstream_error_message(reqwest::StatusCode::BAD_REQUEST, Some(body));
        assert_eq!(msg, "HTTP 400");
    }

    #[test]
    fn upstream_status_is_preserved() {
        assert_eq!(
            convert_status(reqwest::StatusCode::IM_A_TEAPOT),
            StatusCode::IM_A_TEAPOT
        );
    }
}
