/// Substrings that exempt a URL from title fetching.
///
/// Matching is a raw substring test on the whole URL, not a host comparison:
/// `a.com` also matches `https://nota.com/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    patterns: Vec<String>,
}

impl Blacklist {
    /// Split a comma or newline separated list, dropping blank entries.
    pub fn parse(raw: &str) -> Self {
        let patterns = raw
            .split([',', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { patterns }
    }

    pub fn matches(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| url.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
