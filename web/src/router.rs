use crate::controller::{
    health_check_controller, log_session_controller, log_stream_controller,
};
use crate::{params, AppState};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Logstream Gateway API"
        ),
        paths(
            health_check_controller::health_check,
            log_session_controller::create,
            log_stream_controller::stream,
        ),
        components(
            schemas(
                params::log_session::CreateParams,
                log_session_controller::CreateResponse,
            )
        ),
        tags(
            (name = "logstream_gateway", description = "Session-scoped log streaming gateway API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(log_session_routes(app_state.clone()))
        .merge(log_stream_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn log_session_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/logs/sessions", post(log_session_controller::create))
        .layer(cors_layer(&app_state))
        .with_state(app_state)
}

// The stream endpoint sets its own permissive CORS header as part of the
// event-stream response framing, so the configured CORS layer only wraps the
// JSON provisioning route.
fn log_stream_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/logs/stream/{session_id}",
            get(log_stream_controller::stream),
        )
        .with_state(app_state)
}

fn cors_layer(app_state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST])
}
