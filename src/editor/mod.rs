//! Editor capability surface.
//!
//! The host owns the document; conversions only read it and replace ranges in
//! it through [`Editor`]. [`TextBuffer`] is an in-memory implementation used by
//! the CLI and the tests.

pub mod context;
pub mod placeholder;

pub use context::EditorContext;
pub use placeholder::{LINK_PLACEHOLDER, PlaceholderToken, Replacement, TITLE_PLACEHOLDER};

use std::sync::{Mutex, PoisonError};

/// Line/column coordinate. `ch` is a byte offset within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Primitives the host editor exposes. Each call is atomic.
pub trait Editor: Send + Sync {
    /// Currently selected text, empty when the selection is collapsed.
    fn selected_text(&self) -> String;

    /// Replace the selection with `text`, leaving the cursor after it.
    fn replace_selection(&self, text: &str);

    /// Replace `from..to` with `text`; with no `to`, insert at `from`.
    fn replace_range(&self, text: &str, from: Position, to: Option<Position>);

    /// Full document text.
    fn value(&self) -> String;

    /// Start of the selection.
    fn cursor(&self) -> Position;

    /// Text of line `line`, without its terminator. Empty when out of range.
    fn line(&self, line: usize) -> String;
}

/// Convert a byte offset into `text` to a line/column position.
pub fn position_from_index(text: &str, index: usize) -> Position {
    let index = clamp_to_boundary(text, index);
    let before = &text[..index];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Position::new(line, index - line_start)
}

/// Convert a position back to a byte offset, clamping to the document.
pub fn index_from_position(text: &str, pos: Position) -> usize {
    let mut offset = 0;
    for (n, line) in text.split('\n').enumerate() {
        if n == pos.line {
            return clamp_to_boundary(text, offset + pos.ch.min(line.len()));
        }
        offset += line.len() + 1;
    }
    text.len()
}

fn clamp_to_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

// ── In-memory editor ──────────────────────────────────────────────

#[derive(Debug)]
struct BufferState {
    text: String,
    sel_from: usize,
    sel_to: usize,
}

impl BufferState {
    /// Replace `from..to` and map the selection through the change.
    fn splice(&mut self, from: usize, to: usize, insert: &str) {
        self.text.replace_range(from..to, insert);
        let removed = to - from;
        let map = |p: usize| {
            if p < from || (p == from && from != to) {
                p
            } else if p >= to {
                p - removed + insert.len()
            } else {
                from + insert.len()
            }
        };
        self.sel_from = map(self.sel_from);
        self.sel_to = map(self.sel_to);
    }
}

/// Plain string document with a single selection.
#[derive(Debug)]
pub struct TextBuffer {
    state: Mutex<BufferState>,
}

impl TextBuffer {
    /// Buffer with the cursor at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self::with_selection(text, end, end)
    }

    /// Buffer with a collapsed cursor at byte offset `at`.
    pub fn with_cursor(text: impl Into<String>, at: usize) -> Self {
        Self::with_selection(text, at, at)
    }

    /// Buffer with `from..to` selected.
    pub fn with_selection(text: impl Into<String>, from: usize, to: usize) -> Self {
        let text = text.into();
        let (from, to) = (from.min(to), from.max(to));
        let sel_from = clamp_to_boundary(&text, from);
        let sel_to = clamp_to_boundary(&text, to);
        Self {
            state: Mutex::new(BufferState {
                text,
                sel_from,
                sel_to,
            }),
        }
    }

    /// Selection as byte offsets.
    pub fn selection(&self) -> (usize, usize) {
        let state = self.lock();
        (state.sel_from, state.sel_to)
    }

    /// Consume the buffer, returning its text.
    pub fn into_text(self) -> String {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .text
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BufferState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Editor for TextBuffer {
    fn selected_text(&self) -> String {
        let state = self.lock();
        state.text[state.sel_from..state.sel_to].to_string()
    }

    fn replace_selection(&self, text: &str) {
        let mut state = self.lock();
        let (from, to) = (state.sel_from, state.sel_to);
        state.splice(from, to, text);
        let end = from + text.len();
        state.sel_from = end;
        state.sel_to = end;
    }

    fn replace_range(&self, text: &str, from: Position, to: Option<Position>) {
        let mut state = self.lock();
        let start = index_from_position(&state.text, from);
        let end = to.map_or(start, |to| index_from_position(&state.text, to));
        let (start, end) = (start.min(end), start.max(end));
        state.splice(start, end, text);
    }

    fn value(&self) -> String {
        self.lock().text.clone()
    }

    fn cursor(&self) -> Position {
        let state = self.lock();
        position_from_index(&state.text, state.sel_from)
    }

    fn line(&self, line: usize) -> String {
        self.lock()
            .text
            .split('\n')
            .nth(line)
            .unwrap_or_default()
            .to_string()
    }
}
