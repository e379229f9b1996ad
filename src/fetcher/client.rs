use crate::fetcher::{errors::FetchError, pipeline::decode_page, types::PageResponse};
use bytes::{Bytes, BytesMut};
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "stickerboard/0.1 (+https://github.com/stickerboard/stickerboard)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                reqwest::header::HeaderValue::from_static(
                    "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
                ),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Single GET of an HTML page. Non-success statuses, non-HTML bodies and
/// oversized bodies are errors.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<PageResponse, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    // Check content length before downloading
    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(FetchError::UnsupportedContentType(content_type));
    }

    let body_bytes = read_body(response).await?;

    decode_page(final_url, body_bytes, &content_type)
}

/// Streams the body, giving up as soon as it passes `MAX_BODY_SIZE`.
/// Content-Length may be missing (chunked) or wrong (compressed bodies).
async fn read_body(mut response: reqwest::Response) -> Result<Bytes, FetchError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?
    {
        let received = (body.len() + chunk.len()) as u64;
        if received > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(received));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}
