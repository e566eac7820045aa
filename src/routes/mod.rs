// src/routes/mod.rs
pub mod interview;

use crate::state::SharedState;
use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
};
use interview::interview_handler;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(allowed_origin: HeaderValue) -> Router<SharedState> {
    Router::new()
        .route("/api/interview", post(interview_handler))
        .layer(cors_layer(allowed_origin.clone()))
        .layer(middleware::from_fn_with_state(
            allowed_origin,
            reject_foreign_preflight,
        ))
        .layer(TraceLayer::new_for_http())
}

/// One origin, any method or header, credentials allowed. Wildcards cannot be
/// combined with credentials, so methods and headers mirror the request.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Preflights from any other origin get a 400 before reaching the CORS layer.
async fn reject_foreign_preflight(
    State(allowed_origin): State<HeaderValue>,
    req: Request,
    next: Next,
) -> Response {
    let headers = req.headers();
    let is_preflight = req.method() == Method::OPTIONS
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
    let foreign_origin = headers
        .get(header::ORIGIN)
        .filter(|origin| **origin != allowed_origin)
        .cloned();

    match foreign_origin {
        Some(origin) if is_preflight => {
            tracing::warn!(origin = ?origin, "rejected preflight from disallowed origin");
            (StatusCode::BAD_REQUEST, "Disallowed CORS origin").into_response()
        }
        _ => next.run(req).await,
    }
}
