use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Physical size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    /// The web client reads this field as `productImage`.
    #[serde(rename = "productImage")]
    pub image_url: String,
    pub size: Size,
}
