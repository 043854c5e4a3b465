use super::{Editor, position_from_index};
use rand::Rng;
use std::fmt;
use std::future::Future;

/// Prefix shown while a page title is being fetched.
pub const TITLE_PLACEHOLDER: &str = "Fetching Title";
/// Prefix shown while a search result is being resolved.
pub const LINK_PLACEHOLDER: &str = "Fetching Link";

const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 4;

/// Visible marker text, e.g. `Fetching Title#k3x9`.
///
/// Found again later by substring search, so it only needs to be unique
/// within the open document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    text: String,
}

impl PlaceholderToken {
    /// Marker with a fresh random id.
    pub fn new(prefix: &str) -> Self {
        let mut rng = rand::rng();
        let id: String = (0..TOKEN_LEN)
            .map(|_| char::from(TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())]))
            .collect();
        Self::with_id(prefix, &id)
    }

    pub fn with_id(prefix: &str, id: &str) -> Self {
        Self {
            text: format!("{prefix}#{id}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the selection with `wrap(marker)`.
    pub fn insert(&self, editor: &dyn Editor, wrap: impl FnOnce(&str) -> String) {
        editor.replace_selection(&wrap(&self.text));
    }

    /// Swap the marker for `value` wherever it now sits in the document.
    ///
    /// Returns `None` when the marker is gone; the user edited it away and the
    /// result is dropped.
    pub fn resolve(&self, editor: &dyn Editor, value: &str) -> Option<Replacement> {
        let text = editor.value();
        let Some(start) = text.find(&self.text) else {
            tracing::info!(
                placeholder = %self.text,
                value,
                "placeholder no longer in document, dropping result"
            );
            return None;
        };
        let end = start + self.text.len();
        editor.replace_range(
            value,
            position_from_index(&text, start),
            Some(position_from_index(&text, end)),
        );
        Some(Replacement {
            value: value.to_string(),
            index: start,
        })
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Where a resolved value landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub value: String,
    /// Byte offset of the value in the document right after replacement.
    pub index: usize,
}

/// Insert a marker now, await `value`, then put the value where the marker is.
///
/// The marker goes in before the first suspension point so the user sees
/// feedback immediately.
pub async fn replace_async<W, F>(
    editor: &dyn Editor,
    prefix: &str,
    wrap: W,
    value: F,
) -> Option<Replacement>
where
    W: FnOnce(&str) -> String,
    F: Future<Output = String>,
{
    let token = PlaceholderToken::new(prefix);
    token.insert(editor, wrap);
    let value = value.await;
    token.resolve(editor, &value)
}
