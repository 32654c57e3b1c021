use std::fmt;

use crate::view_model::{FormViewModel, LinkRowView};
use crate::{Mp3Link, ScrapeOutcome, SUBMIT_LABEL_IDLE, SUBMIT_LABEL_LOADING};

pub type RequestId = u64;

/// User-visible failure of a scrape request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeFailure {
    /// The service answered but listed no links.
    NoResults,
    /// Any transport, status or decoding error.
    RequestFailed,
}

impl ScrapeFailure {
    pub fn message(self) -> &'static str {
        match self {
            ScrapeFailure::NoResults => "No MP3 files found.",
            ScrapeFailure::RequestFailed => "Error fetching MP3 links.",
        }
    }
}

impl fmt::Display for ScrapeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(Vec<Mp3Link>),
    Failed(ScrapeFailure),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    query: String,
    request: RequestState,
    in_flight: Option<RequestId>,
    last_request_id: RequestId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Request whose completion is still awaited, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn view(&self) -> FormViewModel {
        let loading = self.request.is_loading();
        let error = match &self.request {
            RequestState::Failed(failure) => Some(failure.message().to_string()),
            _ => None,
        };
        let links = match &self.request {
            RequestState::Succeeded(links) => links.iter().map(link_row).collect(),
            _ => Vec::new(),
        };

        FormViewModel {
            query: self.query.clone(),
            loading,
            submit_enabled: !loading,
            submit_label: if loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL_IDLE
            },
            error,
            links,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    /// Enters `Loading`, dropping any earlier results or error.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(request_id);
        self.request = RequestState::Loading;
        self.dirty = true;
        request_id
    }

    /// Applies a completion. Returns false when `request_id` is not in flight.
    pub(crate) fn complete_request(
        &mut self,
        request_id: RequestId,
        outcome: ScrapeOutcome,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.request = match outcome {
            ScrapeOutcome::Links(links) if links.is_empty() => {
                RequestState::Failed(ScrapeFailure::NoResults)
            }
            ScrapeOutcome::Links(links) => RequestState::Succeeded(links),
            ScrapeOutcome::Failed => RequestState::Failed(ScrapeFailure::RequestFailed),
        };
        self.dirty = true;
        true
    }
}

fn link_row(link: &Mp3Link) -> LinkRowView {
    LinkRowView {
        href: link.url().to_string(),
        label: link.label(),
    }
}
