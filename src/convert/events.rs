use super::LinkConverter;
use crate::editor::Editor;
use crate::links::{is_image, is_url, is_web_url};
use strum::{Display, EnumString};

/// What triggered a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PasteKind {
    Paste,
    Drop,
    ManualPaste,
    ManualCommand,
}

/// A host paste or drop event, created per action.
#[derive(Debug, Clone)]
pub struct PasteContext {
    pub kind: PasteKind,
    /// Plain-text payload of the clipboard or drop.
    pub text: String,
    default_prevented: bool,
}

impl PasteContext {
    pub fn new(kind: PasteKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            default_prevented: false,
        }
    }

    pub fn from_paste(text: impl Into<String>) -> Self {
        Self::new(PasteKind::Paste, text)
    }

    pub fn from_drop(text: impl Into<String>) -> Self {
        Self::new(PasteKind::Drop, text)
    }

    /// Mark an event some other handler already took.
    pub fn with_default_prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }

    /// Once set, the host must not run its own paste or drop handling.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Result of offering an event to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Left to the host's default handling.
    Ignored,
    /// Taken over; the host's default handling is suppressed.
    Handled,
}

impl LinkConverter {
    /// Paste interception, active while `enhance_default_paste` is on.
    pub async fn handle_paste(&self, ctx: &mut PasteContext, editor: &dyn Editor) -> EventOutcome {
        self.handle_event(ctx, editor).await
    }

    /// Drop interception, active while `enhance_drop_events` is on.
    pub async fn handle_drop(&self, ctx: &mut PasteContext, editor: &dyn Editor) -> EventOutcome {
        self.handle_event(ctx, editor).await
    }

    async fn handle_event(&self, ctx: &mut PasteContext, editor: &dyn Editor) -> EventOutcome {
        let settings = self.settings();
        let enabled = match ctx.kind {
            PasteKind::Paste => settings.enhance_default_paste,
            PasteKind::Drop => settings.enhance_drop_events,
            PasteKind::ManualPaste | PasteKind::ManualCommand => true,
        };
        if !enabled || ctx.default_prevented() || !self.is_online() {
            return EventOutcome::Ignored;
        }

        // image urls have no meaningful <title>; not worth the download
        if ctx.text.is_empty() || !is_url(&ctx.text) || is_image(&ctx.text) {
            return EventOutcome::Ignored;
        }
        // other schemes paste as typed
        if !is_web_url(&ctx.text) {
            return EventOutcome::Ignored;
        }

        ctx.prevent_default();
        tracing::debug!(kind = %ctx.kind, "intercepted url");
        self.insert_url(editor, &ctx.text).await;
        EventOutcome::Handled
    }
}
