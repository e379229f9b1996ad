use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    extractor::{
        self, ExtractionError, MarkupParser, ProductRecord, STORE_ITEM_LAYOUT_V1, ScraperParser,
    },
    fetcher::fetch,
};

/// Where product records come from. The HTTP layer only sees this trait so
/// handlers can be tested without the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_product(&self, url: &Url) -> Result<ProductRecord, ExtractionError>;
}

/// Fetches the live store page and runs the extractor on it.
pub struct HttpProductSource {
    parser: Box<dyn MarkupParser>,
}

impl HttpProductSource {
    pub fn new() -> Self {
        Self::with_parser(ScraperParser)
    }

    pub fn with_parser(parser: impl MarkupParser + 'static) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }
}

impl Default for HttpProductSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    #[instrument(skip_all, fields(url = %url, layout = STORE_ITEM_LAYOUT_V1.version))]
    async fn fetch_product(&self, url: &Url) -> Result<ProductRecord, ExtractionError> {
        let page = fetch(url.as_str()).await?;
        debug!(
            url_final = %page.url_final,
            encoding = page.encoding.name(),
            bytes = page.body_utf8.len(),
            "Fetched product page"
        );

        let root = self.parser.parse(&page.body_utf8)?;
        extractor::extract_with_layout(&root, &STORE_ITEM_LAYOUT_V1)
    }
}
