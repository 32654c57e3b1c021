pub const TITLE: &str = "MP3 Scraper";
pub const INPUT_PLACEHOLDER: &str = "Enter webpage URL";
pub const SUBMIT_LABEL_IDLE: &str = "Scrape MP3s";
pub const SUBMIT_LABEL_LOADING: &str = "Scraping...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub query: String,
    pub loading: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub error: Option<String>,
    pub links: Vec<LinkRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRowView {
    pub href: String,
    pub label: String,
}
