use std::path::Path;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::proxy::AppState;

/// All application routes: the JSON proxy under /api, translation
/// bundles under /locales, and the built frontend as the fallback.
pub fn build_router(state: AppState) -> Router {
    let static_root = Path::new(&state.config.static_dir).to_path_buf();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/patients", get(handlers::patients::list))
        .route("/api/therapists", get(handlers::therapists::list))
        .route("/api/legal-guardians", get(handlers::legal_guardians::list))
        .route(
            "/api/therapy-plans",
            get(handlers::therapy_plans::list).post(handlers::therapy_plans::create),
        )
        .nest_service("/locales", ServeDir::new(static_root.join("locales")))
        .fallback_service(ServeDir::new(static_root.join("app")))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        "{:>5}ms | {} {:>6} {}",
        start.elapsed().as_millis(),
        response.status().as_u16(),
        method,
        path
    );

    response
}
