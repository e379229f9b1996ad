use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use url::Url;
use utoipa::ToSchema;

static ITEM_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/[^/]+/item/[0-9]+$").expect("Failed to compile item path regex")
});

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProcessStickerUrlRequest {
    pub url: String,
}

impl ProcessStickerUrlRequest {
    /// Accepts only `https://<product_host>/<profile>/item/<digits>`. Query
    /// strings such as `?origin=PUBLIC_PROFILE` are allowed.
    pub fn validate(&self, product_host: &str) -> Result<Url, String> {
        let url = Url::parse(&self.url).map_err(|e| format!("Invalid URL: {}", e))?;

        if url.scheme() != "https" {
            return Err("URL must use https".to_string());
        }
        if url.host_str() != Some(product_host) {
            return Err(format!("URL host must be {}", product_host));
        }
        if !ITEM_PATH_REGEX.is_match(url.path()) {
            return Err("URL must point to a store item".to_string());
        }
        Ok(url)
    }
}
