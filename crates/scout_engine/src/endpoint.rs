use url::Url;

use crate::{FailureKind, ScrapeError};

/// Fixed path appended to the configured base URL.
pub const SCRAPE_PATH: &str = "/api/scrape";

/// Builds `{api_base_url}/api/scrape`. The base must be an absolute http(s) URL.
pub fn scrape_endpoint(api_base_url: &str) -> Result<Url, ScrapeError> {
    let base = api_base_url.trim().trim_end_matches('/');
    let raw = format!("{base}{SCRAPE_PATH}");
    let url = Url::parse(&raw)
        .map_err(|err| ScrapeError::new(FailureKind::InvalidEndpoint, format!("{raw}: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ScrapeError::new(
            FailureKind::InvalidEndpoint,
            format!("unsupported scheme {scheme} in {raw}"),
        )),
    }
}
