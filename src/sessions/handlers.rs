use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::{
    app_state::AppState,
    entities::SessionSticker,
    responses::{ErrorResponse, StatusResponse, error_response},
    sessions::dtos::{GetSessionQuery, GetSessionResponse, SaveSessionRequest, SavedSticker},
};

#[utoipa::path(
    post,
    path = "/save-session",
    tag = "sessions",
    request_body = SaveSessionRequest,
    responses(
        (status = 200, description = "Session saved", body = StatusResponse),
        (status = 400, description = "Invalid session payload", body = ErrorResponse),
        (status = 500, description = "Session could not be stored", body = ErrorResponse)
    )
)]
pub async fn save_session(
    State(state): State<AppState>,
    payload: Result<Json<SaveSessionRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid JSON request");
    };
    if let Err(error) = payload.validate() {
        return error_response(StatusCode::BAD_REQUEST, error);
    }

    let stickers: Vec<SessionSticker> = payload.stickers.iter().map(SessionSticker::from).collect();

    match state
        .session_repo
        .save_session(&payload.session_id, &stickers)
        .await
    {
        Ok(()) => {
            info!(
                session_id = %payload.session_id,
                stickers = stickers.len(),
                "Saved session"
            );
            (
                StatusCode::OK,
                Json(StatusResponse {
                    status: "success".to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(session_id = %payload.session_id, error = ?err, "Failed to save session");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save session data")
        }
    }
}

#[utoipa::path(
    get,
    path = "/get-session",
    tag = "sessions",
    params(GetSessionQuery),
    responses(
        (status = 200, description = "Saved stickers of the session", body = GetSessionResponse),
        (status = 400, description = "Missing sessionId", body = ErrorResponse),
        (status = 500, description = "Session could not be loaded", body = ErrorResponse)
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
    Query(query): Query<GetSessionQuery>,
) -> Response {
    let Some(session_id) = query.session_id.filter(|id| !id.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "sessionId parameter is required");
    };

    match state.session_repo.get_session(&session_id).await {
        Ok(rows) => {
            let stickers = rows.into_iter().map(SavedSticker::from).collect();
            (StatusCode::OK, Json(GetSessionResponse { stickers })).into_response()
        }
        Err(err) => {
            error!(%session_id, error = ?err, "Failed to fetch session");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch session data")
        }
    }
}
