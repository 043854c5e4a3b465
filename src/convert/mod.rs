//! Conversion orchestration: one entry point per user action.
//!
//! Every path that would fetch a title first re-reads the settings and tests
//! the URL against the blacklist. Blacklisted URLs become `[hostname](url)`
//! without touching the network.

pub mod commands;
pub mod events;

pub use commands::{COMMANDS, Command, CommandSpec, Hotkey, Modifier};
pub use events::{EventOutcome, PasteContext, PasteKind};

use crate::config::{Settings, SettingsProvider};
use crate::editor::{
    Editor, EditorContext, LINK_PLACEHOLDER, TITLE_PLACEHOLDER, index_from_position,
    placeholder::replace_async,
};
use crate::error::ConvertError;
use crate::host::{Clipboard, Connectivity, NetworkStatus, Notifier};
use crate::links::fetch::clean_title;
use crate::links::{
    Blacklist, CustomSearchResolver, FaviconPlacement, HtmlTitleFetcher, LinkPattern,
    SearchSource, TitleSource, escape_markdown, hostname, insert_favicon, is_image, is_url,
    is_web_url, shorten_title,
};
use std::sync::Arc;

/// Title inserted when the rendering title source fails.
pub const TITLE_ERROR: &str = "Error fetching title";

pub const OFFLINE_NOTICE: &str = "You must be online to use this feature";
pub const NO_SELECTION_NOTICE: &str = "No text selected";
pub const MISSING_CREDENTIALS_NOTICE: &str =
    "You must set your search API key and custom search engine ID in the settings";

/// Ties classification, fetching, sanitizing and placeholder replacement
/// together. Holds no per-action state.
pub struct LinkConverter {
    settings: Arc<dyn SettingsProvider>,
    scraper: Arc<dyn TitleSource>,
    renderer: Option<Arc<dyn TitleSource>>,
    search: Arc<dyn SearchSource>,
    notifier: Arc<dyn Notifier>,
    network: Arc<dyn NetworkStatus>,
}

impl LinkConverter {
    /// Converter using the HTTP scraper and the Custom Search API.
    pub fn new(settings: Arc<dyn SettingsProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            settings,
            scraper: Arc::new(HtmlTitleFetcher::new()),
            renderer: None,
            search: Arc::new(CustomSearchResolver::new(Arc::clone(&notifier))),
            notifier,
            network: Arc::new(Connectivity::default()),
        }
    }

    pub fn with_title_source(mut self, source: Arc<dyn TitleSource>) -> Self {
        self.scraper = source;
        self
    }

    /// Title source used when `use_new_scraper` is off.
    pub fn with_renderer(mut self, renderer: Arc<dyn TitleSource>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_search_source(mut self, search: Arc<dyn SearchSource>) -> Self {
        self.search = search;
        self
    }

    pub fn with_network_status(mut self, network: Arc<dyn NetworkStatus>) -> Self {
        self.network = network;
        self
    }

    fn settings(&self) -> Arc<Settings> {
        self.settings.current()
    }

    fn is_online(&self) -> bool {
        self.network.is_online()
    }

    fn link_pattern(&self) -> LinkPattern {
        let settings = self.settings();
        LinkPattern::new(&settings.link_regex).unwrap_or_else(|e| {
            tracing::warn!(pattern = %settings.link_regex, error = %e, "invalid link pattern, using default");
            LinkPattern::default()
        })
    }

    /// Re-read settings and test `url` against a freshly derived blacklist.
    pub fn is_blacklisted(&self, url: &str) -> bool {
        if let Err(e) = self.settings.refresh() {
            tracing::warn!(error = %e, "could not refresh settings, using last known");
        }
        let blacklisted = Blacklist::parse(&self.settings().website_blacklist).matches(url);
        if blacklisted {
            tracing::debug!(url, "url is blacklisted, skipping title fetch");
        }
        blacklisted
    }

    /// Title for `url` from the configured source, without line breaks.
    pub async fn fetch_url_title(&self, url: &str) -> String {
        let source = if self.settings().use_new_scraper {
            &self.scraper
        } else if let Some(renderer) = &self.renderer {
            renderer
        } else {
            tracing::debug!("no rendering title source, using scraper");
            &self.scraper
        };

        match source.fetch_title(url).await {
            Ok(title) => clean_title(&title),
            Err(e) => {
                tracing::error!(url, error = %e, "title source failed");
                TITLE_ERROR.to_string()
            }
        }
    }

    /// Replace the selection with `[title](url)`, fetching the title behind a
    /// placeholder.
    pub async fn convert_url_to_titled_link(&self, editor: &dyn Editor, url: &str) {
        if self.is_blacklisted(url) {
            editor.replace_selection(&format!("[{}]({url})", hostname(url)));
            return;
        }

        let max_len = self.settings().maximum_title_length;
        let replaced = replace_async(
            editor,
            TITLE_PLACEHOLDER,
            |marker| format!("[{marker}]({url})"),
            async {
                let title = self.fetch_url_title(url).await;
                shorten_title(&escape_markdown(&title), max_len)
            },
        )
        .await;

        if let Some(replaced) = replaced {
            self.paste_favicon(
                editor,
                url,
                &replaced.value,
                FaviconPlacement::BeforeTitle,
                replaced.index,
            );
        }
    }

    /// Turn a selected bare URL, or the URL of a selected link, into a titled link.
    pub async fn enhance_existing_link(&self, editor: &dyn Editor) -> Result<(), ConvertError> {
        if !self.is_online() {
            return Ok(());
        }

        let selected = editor.selected_text().trim().to_string();
        if is_web_url(&selected) {
            self.convert_url_to_titled_link(editor, &selected).await;
            return Ok(());
        }

        let pattern = self.link_pattern();
        if pattern.is_match(&selected) {
            let url = pattern.url_from_link(&selected)?;
            self.convert_url_to_titled_link(editor, &url).await;
        }
        Ok(())
    }

    /// Link the selected text to the first search result for it.
    pub async fn fetch_first_search_result(&self, editor: &dyn Editor) {
        if !self.is_online() {
            self.notifier.notify(OFFLINE_NOTICE);
            return;
        }

        let selected = editor.selected_text();
        if selected.trim().is_empty() {
            self.notifier.notify(NO_SELECTION_NOTICE);
            return;
        }

        let settings = self.settings();
        if !settings.has_search_credentials() {
            self.notifier.notify(MISSING_CREDENTIALS_NOTICE);
            return;
        }

        let replaced = replace_async(
            editor,
            LINK_PLACEHOLDER,
            |marker| format!("[{selected}]({marker})"),
            self.search.resolve_first_result(
                &settings.api_key,
                &settings.custom_search_engine_id,
                &selected,
            ),
        )
        .await;

        if let Some(replaced) = replaced {
            // `[selected](` precedes the resolved link
            let title_at = replaced.index.saturating_sub(selected.len() + 2);
            self.paste_favicon(
                editor,
                &replaced.value,
                &selected,
                FaviconPlacement::BeforeTitle,
                title_at,
            );
        }
    }

    /// Prefix the selected URL or link with its favicon.
    pub fn enhance_with_favicon(&self, editor: &dyn Editor) -> Result<(), ConvertError> {
        if !self.is_online() {
            return Ok(());
        }

        let selected = editor.selected_text().trim().to_string();
        let selection_at = index_from_position(&editor.value(), editor.cursor());

        if is_url(&selected) {
            self.paste_favicon(
                editor,
                &selected,
                &selected,
                FaviconPlacement::AtAnchor,
                selection_at,
            );
            return Ok(());
        }

        let pattern = self.link_pattern();
        if pattern.is_match(&selected) {
            let url = pattern.url_from_link(&selected)?;
            self.paste_favicon(
                editor,
                &url,
                &selected,
                FaviconPlacement::BeforeTitle,
                selection_at,
            );
        }
        Ok(())
    }

    /// Insert the clipboard text untouched.
    pub async fn normal_paste(
        &self,
        editor: &dyn Editor,
        clipboard: &dyn Clipboard,
    ) -> Result<(), ConvertError> {
        let text = read_clipboard(clipboard).await?;
        if !text.is_empty() {
            editor.replace_selection(&text);
        }
        Ok(())
    }

    /// Paste command for hosts whose paste events cannot be intercepted.
    ///
    /// Falls back to inserting the raw clipboard text whenever a conversion
    /// does not apply.
    pub async fn manual_paste(
        &self,
        editor: &dyn Editor,
        clipboard: &dyn Clipboard,
    ) -> Result<(), ConvertError> {
        let text = read_clipboard(clipboard).await?;

        tracing::debug!(kind = %PasteKind::ManualPaste, "pasting from clipboard");
        if !self.is_online() {
            editor.replace_selection(&text);
            return Ok(());
        }
        if text.is_empty() {
            return Ok(());
        }
        if !is_url(&text) || is_image(&text) || !is_web_url(&text) {
            editor.replace_selection(&text);
            return Ok(());
        }

        self.insert_url(editor, &text).await;
        Ok(())
    }

    /// Shared tail of paste, drop and manual paste once the payload is a
    /// fetchable URL.
    async fn insert_url(&self, editor: &dyn Editor, text: &str) {
        if EditorContext::capture(editor).wants_raw_url() {
            editor.replace_selection(text);
            return;
        }

        let url = text.trim();
        let selected = editor.selected_text().trim().to_string();
        if !selected.is_empty() && self.settings().should_preserve_selection_as_title {
            editor.replace_selection(&format!("[{selected}]({url})"));
            return;
        }

        self.convert_url_to_titled_link(editor, url).await;
    }

    fn paste_favicon(
        &self,
        editor: &dyn Editor,
        url: &str,
        anchor: &str,
        placement: FaviconPlacement,
        search_from: usize,
    ) {
        if self.settings().insert_favicons {
            insert_favicon(editor, url, anchor, placement, search_from);
        }
    }
}

async fn read_clipboard(clipboard: &dyn Clipboard) -> Result<String, ConvertError> {
    clipboard
        .read_text()
        .await
        .map_err(|e| ConvertError::Clipboard(e.to_string()))
}
