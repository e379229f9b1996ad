use sqlx::FromRow;

/// --- Tables ---

/// One placed sticker of a saved visualizer session (`sessions` table,
/// without the surrogate key and session id).
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SessionSticker {
    pub sticker_id: String,
    pub url: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}
