use std::sync::Arc;

use tempfile::TempDir;

use linktitle::config::{Settings, SettingsHandle};
use linktitle::convert::PasteContext;
use linktitle::editor::{Editor, TextBuffer};

use super::convert_harness::{Harness, PAGE_URL};

#[tokio::test]
async fn blacklisted_url_is_linked_by_hostname() {
    let h = Harness::new(Settings {
        website_blacklist: "example.com".into(),
        ..Settings::default()
    });
    let buf = TextBuffer::new("");

    h.converter
        .convert_url_to_titled_link(&buf, "https://example.com/x")
        .await;

    assert_eq!(buf.value(), "[example.com](https://example.com/x)");
    assert_eq!(h.titles.calls(), 0);
}

#[tokio::test]
async fn blacklist_match_is_substring_of_whole_url() {
    let h = Harness::new(Settings {
        website_blacklist: "tracking, /private/".into(),
        ..Settings::default()
    });
    let buf = TextBuffer::new("");

    h.converter
        .convert_url_to_titled_link(&buf, "https://docs.example.org/private/x")
        .await;

    assert_eq!(
        buf.value(),
        "[docs.example.org](https://docs.example.org/private/x)"
    );
    assert_eq!(h.titles.calls(), 0);
}

#[tokio::test]
async fn blacklist_edits_apply_to_next_paste() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    Settings::default().save(&path).unwrap();
    let h = Harness::with_provider(Arc::new(SettingsHandle::new(Settings::default(), &path)));

    let buf = TextBuffer::new("");
    h.converter
        .handle_paste(&mut PasteContext::from_paste(PAGE_URL), &buf)
        .await;
    assert_eq!(buf.value(), "[Example Title](https://example.com/page)");
    assert_eq!(h.titles.calls(), 1);

    Settings {
        website_blacklist: "example.com\nnews.site".into(),
        ..Settings::default()
    }
    .save(&path)
    .unwrap();

    let buf = TextBuffer::new("");
    h.converter
        .handle_paste(&mut PasteContext::from_paste(PAGE_URL), &buf)
        .await;
    assert_eq!(buf.value(), "[example.com](https://example.com/page)");
    assert_eq!(h.titles.calls(), 1);
}
