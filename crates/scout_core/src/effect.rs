#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the query to the scrape endpoint; answer with `Msg::ScrapeCompleted`.
    SubmitScrape {
        request_id: crate::RequestId,
        page_url: String,
    },
}
