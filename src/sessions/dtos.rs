use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{entities::SessionSticker, extractor::Size};

const MAX_ID_LEN: usize = 255;
const MAX_URL_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedSticker {
    pub sticker_id: String,
    pub url: String,
    pub size: Size,
    pub position: Position,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveSessionRequest {
    pub session_id: String,
    #[serde(default)]
    pub stickers: Vec<SavedSticker>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetSessionQuery {
    /// Identifier the client generated for its visualizer session.
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetSessionResponse {
    pub stickers: Vec<SavedSticker>,
}

impl SaveSessionRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.session_id.is_empty() {
            return Err("sessionId cannot be empty".to_string());
        }
        if self.session_id.chars().count() > MAX_ID_LEN {
            return Err("sessionId too long".to_string());
        }
        for sticker in &self.stickers {
            if sticker.sticker_id.chars().count() > MAX_ID_LEN {
                return Err(format!("stickerId too long: {}", sticker.sticker_id));
            }
            if sticker.url.chars().count() > MAX_URL_LEN {
                return Err(format!("url too long for sticker {}", sticker.sticker_id));
            }
        }
        Ok(())
    }
}

impl From<&SavedSticker> for SessionSticker {
    fn from(sticker: &SavedSticker) -> Self {
        Self {
            sticker_id: sticker.sticker_id.clone(),
            url: sticker.url.clone(),
            width: sticker.size.width,
            height: sticker.size.height,
            x: sticker.position.x,
            y: sticker.position.y,
        }
    }
}

impl From<SessionSticker> for SavedSticker {
    fn from(row: SessionSticker) -> Self {
        Self {
            sticker_id: row.sticker_id,
            url: row.url,
            size: Size {
                width: row.width,
                height: row.height,
            },
            position: Position { x: row.x, y: row.y },
        }
    }
}
