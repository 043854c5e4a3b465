/// Characters a fetched title may already carry backslash-escaped.
const UNESCAPABLE: &[char] = &['*', '_', '`', '~', '\\', '[', ']'];
/// Characters escaped in the final title.
const ESCAPED: &[char] = &['*', '_', '`', '<', '>', '~', '\\', '[', ']'];

/// Escape markdown-significant characters in a title.
///
/// Existing escapes are removed first, so an already escaped title comes out
/// escaped exactly once.
pub fn escape_markdown(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && UNESCAPABLE.contains(&next)
        {
            unescaped.push(next);
            chars.next();
            continue;
        }
        unescaped.push(c);
    }

    let mut escaped = String::with_capacity(unescaped.len() + 8);
    for c in unescaped.chars() {
        if ESCAPED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Cut `title` to `max` characters plus `...`.
///
/// `max == 0` means unlimited. Titles shorter than `max + 3` are left alone,
/// since the ellipsis would not save anything.
pub fn shorten_title(title: &str, max: usize) -> String {
    if max == 0 || title.chars().count() < max + 3 {
        return title.to_string();
    }
    let head: String = title.chars().take(max).collect();
    format!("{head}...")
}
