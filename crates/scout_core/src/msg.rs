#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User pressed the scrape trigger.
    SubmitClicked,
    /// The scrape call for `request_id` finished.
    ScrapeCompleted {
        request_id: crate::RequestId,
        outcome: ScrapeOutcome,
    },
}

/// What came back from the scrape endpoint, stripped of transport detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// The service answered; the list may be empty.
    Links(Vec<crate::Mp3Link>),
    /// Transport, status or decoding failure.
    Failed,
}
