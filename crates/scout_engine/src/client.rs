use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use scout_logging::scout_debug;
use url::Url;

use crate::endpoint::scrape_endpoint;
use crate::{FailureKind, ScrapeError, ScrapeRequest, ScrapeResponse, ScrapedLink};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_base_url: String,
    /// `None` leaves the call unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the call unbounded.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait ScrapeClient: Send + Sync {
    /// Asks the service to scrape `page_url`. An empty list is a valid answer.
    async fn scrape(&self, page_url: &str) -> Result<Vec<ScrapedLink>, ScrapeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScrapeClient {
    endpoint: Url,
    max_response_bytes: u64,
    client: reqwest::Client,
}

impl ReqwestScrapeClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ScrapeError> {
        let endpoint = scrape_endpoint(&settings.api_base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ScrapeError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            endpoint,
            max_response_bytes: settings.max_response_bytes,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ScrapeError> {
        let max_bytes = self.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ScrapeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ScrapeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ScrapeClient for ReqwestScrapeClient {
    async fn scrape(&self, page_url: &str) -> Result<Vec<ScrapedLink>, ScrapeError> {
        let body = serde_json::to_vec(&ScrapeRequest { page_url })
            .map_err(|err| ScrapeError::new(FailureKind::Encode, err.to_string()))?;

        scout_debug!("POST {} page_url_len={}", self.endpoint, page_url.len());
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        let parsed: ScrapeResponse = serde_json::from_slice(&bytes)
            .map_err(|err| ScrapeError::new(FailureKind::Decode, err.to_string()))?;
        let links = parsed.into_links()?;
        scout_debug!("scrape returned {} link(s)", links.len());
        Ok(links)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ScrapeError {
    if err.is_timeout() {
        return ScrapeError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ScrapeError::new(FailureKind::Decode, err.to_string());
    }
    ScrapeError::new(FailureKind::Network, err.to_string())
}
