//! MP3 scout engine: scrape endpoint client and effect execution.
mod client;
mod endpoint;
mod engine;
mod types;
mod wire;

pub use client::{ClientSettings, ReqwestScrapeClient, ScrapeClient, DEFAULT_API_BASE_URL};
pub use endpoint::{scrape_endpoint, SCRAPE_PATH};
pub use engine::{EngineError, EngineHandle};
pub use types::{EngineEvent, FailureKind, RequestId, ScrapeError};
pub use wire::{LinkType, ScrapeRequest, ScrapeResponse, ScrapedLink};
