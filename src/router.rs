use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    app_state::AppState,
    extractor::{ProductRecord, Size},
    health::{self, DatabaseStatus, HealthResponse},
    middleware::{CorsPolicy, cors_middleware},
    products::{self, dtos::ProcessStickerUrlRequest},
    responses::{ErrorResponse, StatusResponse},
    sessions::{
        self,
        dtos::{GetSessionResponse, Position, SaveSessionRequest, SavedSticker},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::handlers::process_sticker_url,
        sessions::handlers::save_session,
        sessions::handlers::get_session,
    ),
    components(schemas(
        ProcessStickerUrlRequest,
        ProductRecord,
        Size,
        SaveSessionRequest,
        SavedSticker,
        Position,
        GetSessionResponse,
        StatusResponse,
        ErrorResponse,
        HealthResponse,
        DatabaseStatus,
    )),
    tags(
        (name = "products", description = "Store item extraction"),
        (name = "sessions", description = "Saved visualizer sessions"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn build_router(state: AppState, cors: CorsPolicy) -> Router {
    Router::new()
        .route(
            "/process-sticker-url",
            post(products::handlers::process_sticker_url),
        )
        .route("/save-session", post(sessions::handlers::save_session))
        .route("/get-session", get(sessions::handlers::get_session))
        .route("/healthz", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(middleware::from_fn_with_state(cors, cors_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
