/// Appended to the label of links the service only keeps for a short while.
pub const TEMPORARY_SUFFIX: &str = " (Temporary)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLifetime {
    Permanent,
    Temporary,
}

/// One entry of a scrape result, with its wire shape already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mp3Link {
    /// Bare URL string.
    Plain(String),
    /// `{ url, type }` entry.
    Tagged { url: String, lifetime: LinkLifetime },
}

impl Mp3Link {
    pub fn plain(url: impl Into<String>) -> Self {
        Mp3Link::Plain(url.into())
    }

    pub fn tagged(url: impl Into<String>, lifetime: LinkLifetime) -> Self {
        Mp3Link::Tagged {
            url: url.into(),
            lifetime,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Mp3Link::Plain(url) | Mp3Link::Tagged { url, .. } => url,
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(
            self,
            Mp3Link::Tagged {
                lifetime: LinkLifetime::Temporary,
                ..
            }
        )
    }

    /// Display text: the file name, annotated when the link is temporary.
    pub fn label(&self) -> String {
        let filename = filename_from_url(self.url());
        if self.is_temporary() {
            format!("{filename}{TEMPORARY_SUFFIX}")
        } else {
            filename.to_string()
        }
    }
}

/// Final `/`-delimited segment of `url`. Empty when the URL ends with `/`.
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
