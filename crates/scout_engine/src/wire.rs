//! JSON shapes exchanged with the scrape endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FailureKind, ScrapeError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest<'a> {
    pub page_url: &'a str,
}

/// Success body. Other fields (`message`, `error`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    mp3_links: Option<LinksField>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum LinksField {
    List(Vec<ScrapedLink>),
    Other(Value),
}

impl ScrapeResponse {
    /// Links in service order.
    ///
    /// A missing field or a falsy value (`null`, `false`, `0`, `""`) reads as
    /// an empty list; any other non-list value is a decode error.
    pub fn into_links(self) -> Result<Vec<ScrapedLink>, ScrapeError> {
        match self.mp3_links {
            None => Ok(Vec::new()),
            Some(LinksField::List(links)) => Ok(links),
            Some(LinksField::Other(value)) if is_falsy(&value) => Ok(Vec::new()),
            Some(LinksField::Other(value)) => Err(ScrapeError::new(
                FailureKind::Decode,
                format!("mp3_links is not a list of links: {value}"),
            )),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// A link entry in either of the shapes the service has used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScrapedLink {
    Url(String),
    Entry {
        url: String,
        #[serde(rename = "type", default)]
        kind: LinkType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    #[default]
    Permanent,
    Temporary,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<ScrapedLink>, ScrapeError> {
        serde_json::from_str::<ScrapeResponse>(body).unwrap().into_links()
    }

    #[test]
    fn plain_string_links() {
        let links = parse(r#"{"mp3_links": ["https://x/a.mp3", "https://x/b.mp3"]}"#).unwrap();
        assert_eq!(
            links,
            vec![
                ScrapedLink::Url("https://x/a.mp3".to_string()),
                ScrapedLink::Url("https://x/b.mp3".to_string()),
            ]
        );
    }

    #[test]
    fn structured_links_keep_type() {
        let links = parse(
            r#"{"mp3_links": [
                {"url": "https://x/a.mp3", "type": "temporary"},
                {"url": "https://x/b.mp3", "type": "permanent"},
                {"url": "https://x/c.mp3", "type": "archived"},
                {"url": "https://x/d.mp3"}
            ]}"#,
        )
        .unwrap();
        let entry = |url: &str, kind| ScrapedLink::Entry {
            url: url.to_string(),
            kind,
        };
        assert_eq!(
            links,
            vec![
                entry("https://x/a.mp3", LinkType::Temporary),
                entry("https://x/b.mp3", LinkType::Permanent),
                entry("https://x/c.mp3", LinkType::Other),
                entry("https://x/d.mp3", LinkType::Permanent),
            ]
        );
    }

    #[test]
    fn missing_and_falsy_links_are_empty() {
        for body in [
            r#"{"message": "No MP3 files found"}"#,
            r#"{"mp3_links": null}"#,
            r#"{"mp3_links": []}"#,
            r#"{"mp3_links": false}"#,
            r#"{"mp3_links": 0}"#,
            r#"{"mp3_links": 0.0}"#,
            r#"{"mp3_links": ""}"#,
        ] {
            assert_eq!(parse(body).unwrap(), Vec::new(), "{body}");
        }
    }

    #[test]
    fn truthy_non_list_is_decode_error() {
        for body in [
            r#"{"mp3_links": true}"#,
            r#"{"mp3_links": 3}"#,
            r#"{"mp3_links": "https://x/a.mp3"}"#,
            r#"{"mp3_links": {"url": "https://x/a.mp3"}}"#,
            r#"{"mp3_links": [42]}"#,
        ] {
            assert_eq!(parse(body).unwrap_err().kind, FailureKind::Decode, "{body}");
        }
    }

    #[test]
    fn request_body_has_page_url_only() {
        let body = serde_json::to_string(&ScrapeRequest {
            page_url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body, r#"{"page_url":"https://example.com"}"#);
    }
}
