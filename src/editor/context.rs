use super::Editor;

/// Text of the cursor's line, up to the cursor.
///
/// Every context-sensitive check reads only this prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContext {
    line_prefix: String,
}

impl EditorContext {
    pub fn new(line_prefix: impl Into<String>) -> Self {
        Self {
            line_prefix: line_prefix.into(),
        }
    }

    /// Capture the current line prefix from `editor`.
    pub fn capture(editor: &dyn Editor) -> Self {
        let cursor = editor.cursor();
        let line = editor.line(cursor.line);
        let mut end = cursor.ch.min(line.len());
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        Self::new(&line[..end])
    }

    pub fn line_prefix(&self) -> &str {
        &self.line_prefix
    }

    /// Cursor sits right after `](`, i.e. inside the URL part of a link being typed.
    pub fn is_markdown_link_already(&self) -> bool {
        self.line_prefix.ends_with("](")
    }

    /// Line starts with a blockquote marker.
    pub fn is_after_quote(&self) -> bool {
        self.line_prefix.trim_start().starts_with('>')
    }

    /// Cursor follows a quotation mark, as inside `href="`.
    pub fn is_after_quote_mark(&self) -> bool {
        self.line_prefix.ends_with(['"', '\''])
    }

    /// Any context in which the raw URL should be inserted untouched.
    pub fn wants_raw_url(&self) -> bool {
        self.is_markdown_link_already() || self.is_after_quote() || self.is_after_quote_mark()
    }
}
