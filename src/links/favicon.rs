use crate::editor::{Editor, position_from_index};
use url::Url;

const FAVICON_SERVICE: &str = "http://www.google.com/s2/favicons?domain=";

/// Where the favicon goes relative to the anchor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaviconPlacement {
    /// Right after the `[` of the link whose title contains the anchor.
    BeforeTitle,
    /// At the start of the anchor itself.
    AtAnchor,
}

/// Hostname with a leading `www.` removed.
pub fn favicon_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// 16x16 inline image pointing at the favicon service for `url`'s domain.
pub fn favicon_tag(url: &str) -> Option<String> {
    let domain = favicon_domain(url)?;
    Some(format!(
        "<img width=16 height=16 src='{FAVICON_SERVICE}{domain}'/>"
    ))
}

/// Insert the favicon for `url` next to `anchor`.
///
/// The anchor is searched from byte offset `search_from` onwards, then in the
/// whole document. Returns whether anything was inserted.
pub fn insert_favicon(
    editor: &dyn Editor,
    url: &str,
    anchor: &str,
    placement: FaviconPlacement,
    search_from: usize,
) -> bool {
    let Some(tag) = favicon_tag(url) else {
        tracing::debug!(url, "no favicon domain for url");
        return false;
    };
    let text = editor.value();
    let Some(anchor_at) = locate(&text, anchor, search_from) else {
        tracing::debug!(anchor, "favicon anchor not found");
        return false;
    };

    let insert_at = match placement {
        FaviconPlacement::AtAnchor => anchor_at,
        FaviconPlacement::BeforeTitle => {
            let bracket = if text[anchor_at..].starts_with('[') {
                Some(anchor_at)
            } else {
                text[..anchor_at].rfind('[')
            };
            let Some(bracket) = bracket else {
                tracing::debug!(anchor, "no link bracket before favicon anchor");
                return false;
            };
            bracket + 1
        }
    };

    editor.replace_range(&tag, position_from_index(&text, insert_at), None);
    true
}

fn locate(text: &str, anchor: &str, search_from: usize) -> Option<usize> {
    text.get(search_from..)
        .and_then(|rest| rest.find(anchor))
        .map(|i| i + search_from)
        .or_else(|| text.find(anchor))
}
