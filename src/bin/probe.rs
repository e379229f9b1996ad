use anyhow::{Context, Result, bail};
use stickerboard::products::{HttpProductSource, ProductSource};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Runs one extraction against a live store page. Useful when the site layout
/// changes and the api starts answering 500.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let Some(raw) = std::env::args().nth(1) else {
        bail!("usage: probe <store item url>");
    };
    let url = Url::parse(&raw).with_context(|| format!("Invalid URL: {}", raw))?;

    match HttpProductSource::new().fetch_product(&url).await {
        Ok(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("extraction failed: {}", err);
            eprintln!("{:#?}", err);
            std::process::exit(1);
        }
    }
}
