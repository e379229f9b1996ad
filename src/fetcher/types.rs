use encoding_rs::Encoding;
use url::Url;

/// A successfully fetched HTML page, decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    /// Address after redirects.
    pub url_final: Url,
    pub encoding: &'static Encoding,
    pub body_utf8: String,
}
