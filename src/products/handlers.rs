use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    extractor::{ExtractionError, ProductRecord},
    products::dtos::ProcessStickerUrlRequest,
    responses::{ErrorResponse, error_response},
};

#[utoipa::path(
    post,
    path = "/process-sticker-url",
    tag = "products",
    request_body = ProcessStickerUrlRequest,
    responses(
        (status = 200, description = "Product extracted", body = ProductRecord),
        (status = 400, description = "Invalid JSON or store item URL", body = ErrorResponse),
        (status = 422, description = "Product is not a sticker", body = ErrorResponse),
        (status = 500, description = "Page could not be fetched or read", body = ErrorResponse)
    )
)]
pub async fn process_sticker_url(
    State(state): State<AppState>,
    payload: Result<Json<ProcessStickerUrlRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid JSON request");
    };

    let url = match payload.validate(&state.product_host) {
        Ok(url) => url,
        Err(reason) => {
            info!(url = %payload.url, %reason, "Rejected product URL");
            return error_response(StatusCode::BAD_REQUEST, "Invalid Sticker Mule URL format");
        }
    };

    match state.products.fetch_product(&url).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(ExtractionError::NotASticker { category }) => {
            info!(url = %url, %category, "Product is not a sticker");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "Product is not a sticker")
        }
        Err(err) => {
            warn!(url = %url, error = %err, "Failed to extract product");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch or parse product information",
            )
        }
    }
}
