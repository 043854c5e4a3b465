use crate::config::DEFAULT_LINK_REGEX;
use crate::error::ConvertError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(gif|jpe?g|tiff?|png|webp|bmp|tga|psd|ai)$").expect("valid image pattern")
});

static DEFAULT_LINK: LazyLock<LinkPattern> = LazyLock::new(LinkPattern::default);

/// The whole trimmed string parses as an absolute URL.
pub fn is_url(text: &str) -> bool {
    parse_url(text).is_some()
}

/// An absolute http(s) URL with a host, the only kind worth fetching a title for.
pub fn is_web_url(text: &str) -> bool {
    parse_url(text).is_some_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// The string is a markdown link `[title](url)` under the default pattern.
pub fn is_linked_url(text: &str) -> bool {
    DEFAULT_LINK.is_match(text)
}

/// The URL's path ends in a common image extension.
pub fn is_image(text: &str) -> bool {
    let text = text.trim();
    match Url::parse(text) {
        Ok(url) => IMAGE_EXTENSION.is_match(url.path()),
        Err(_) => IMAGE_EXTENSION.is_match(text),
    }
}

/// Host part of `url`, or the input itself when it does not parse.
pub fn hostname(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_else(|| url.to_string())
}

fn parse_url(text: &str) -> Option<Url> {
    let candidate = text.trim();
    if candidate.is_empty() || candidate.contains(char::is_whitespace) {
        return None;
    }
    Url::parse(candidate).ok()
}

/// Compiled markdown link pattern. Group 1 captures the title, group 2 the URL.
#[derive(Debug, Clone)]
pub struct LinkPattern {
    regex: Regex,
}

impl LinkPattern {
    pub fn new(pattern: &str) -> Result<Self, ConvertError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// URL part of a link. Only meaningful once [`LinkPattern::is_match`] holds.
    pub fn url_from_link(&self, text: &str) -> Result<String, ConvertError> {
        self.capture(text, 2)
    }

    fn capture(&self, text: &str, group: usize) -> Result<String, ConvertError> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(group))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ConvertError::MalformedLink(text.to_string()))
    }
}

impl Default for LinkPattern {
    fn default() -> Self {
        Self {
            regex: Regex::new(DEFAULT_LINK_REGEX).expect("valid default link pattern"),
        }
    }
}
