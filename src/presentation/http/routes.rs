// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    error::panic_response,
    middleware::require_bearer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    routing::{MethodRouter, get, post, put},
};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub expose_docs: bool,
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

/// Wraps a method router so every method on it requires a bearer token.
fn guarded(router: MethodRouter) -> MethodRouter {
    router.route_layer(middleware::from_fn(require_bearer))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/articles", guarded(post(articles::create_article)))
        .route(
            "/api/articles/{id}",
            get(articles::get_article).merge(guarded(
                put(articles::update_article).delete(articles::delete_article),
            )),
        );

    if options.expose_docs {
        router = router.merge(openapi::docs_router());
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
