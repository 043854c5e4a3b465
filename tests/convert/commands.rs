use linktitle::config::Settings;
use linktitle::convert::{
    Command, MISSING_CREDENTIALS_NOTICE, NO_SELECTION_NOTICE, OFFLINE_NOTICE,
};
use linktitle::editor::{Editor, TextBuffer};
use linktitle::host::StaticClipboard;

use super::convert_harness::{Harness, favicon, search_settings};

#[tokio::test]
async fn enhance_selected_bare_url() {
    let h = Harness::new(Settings::default());
    let buf = TextBuffer::with_selection("go https://example.com/page now", 3, 27);

    h.converter.enhance_existing_link(&buf).await.unwrap();

    assert_eq!(
        buf.value(),
        "go [Example Title](https://example.com/page) now"
    );
}

#[tokio::test]
async fn enhance_selected_link_replaces_title() {
    let h = Harness::new(Settings::default());
    let link = "[old name](https://example.com/page)";
    let buf = TextBuffer::with_selection(link, 0, link.len());

    h.converter.enhance_existing_link(&buf).await.unwrap();

    assert_eq!(buf.value(), "[Example Title](https://example.com/page)");
    assert_eq!(h.titles.calls(), 1);
}

#[tokio::test]
async fn enhance_ignores_plain_selection() {
    let h = Harness::new(Settings::default());
    let buf = TextBuffer::with_selection("no links", 0, 8);

    h.converter.enhance_existing_link(&buf).await.unwrap();

    assert_eq!(buf.value(), "no links");
    assert_eq!(h.titles.calls(), 0);
}

#[tokio::test]
async fn enhance_is_silent_offline() {
    let h = Harness::new(Settings::default());
    h.network.set_online(false);
    let buf = TextBuffer::with_selection("https://example.com/page", 0, 24);

    h.converter.enhance_existing_link(&buf).await.unwrap();

    assert_eq!(buf.value(), "https://example.com/page");
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn search_result_becomes_link_with_favicon() {
    let h = Harness::new(Settings {
        insert_favicons: true,
        ..search_settings()
    });
    let buf = TextBuffer::with_selection("learn rust today", 6, 10);

    h.converter.fetch_first_search_result(&buf).await;

    assert_eq!(
        buf.value(),
        format!(
            "learn [{}rust](https://www.rust-lang.org/) today",
            favicon("rust-lang.org")
        )
    );
    assert_eq!(h.search.queries(), vec!["rust"]);
}

#[tokio::test]
async fn search_needs_network_selection_and_credentials() {
    let h = Harness::new(search_settings());
    h.network.set_online(false);
    let buf = TextBuffer::with_selection("rust", 0, 4);
    h.converter.fetch_first_search_result(&buf).await;
    assert_eq!(h.notifier.messages(), vec![OFFLINE_NOTICE]);

    let h = Harness::new(search_settings());
    let buf = TextBuffer::with_selection("  ", 0, 2);
    h.converter.fetch_first_search_result(&buf).await;
    assert_eq!(h.notifier.messages(), vec![NO_SELECTION_NOTICE]);

    let h = Harness::new(Settings::default());
    let buf = TextBuffer::with_selection("rust", 0, 4);
    h.converter.fetch_first_search_result(&buf).await;
    assert_eq!(h.notifier.messages(), vec![MISSING_CREDENTIALS_NOTICE]);
    assert_eq!(buf.value(), "rust");
    assert!(h.search.queries().is_empty());
}

#[tokio::test]
async fn favicon_command_on_bare_url() {
    let h = Harness::new(Settings {
        insert_favicons: true,
        ..Settings::default()
    });
    let text = "see https://www.example.com/a";
    let buf = TextBuffer::with_selection(text, 4, text.len());

    h.converter.enhance_with_favicon(&buf).unwrap();

    assert_eq!(
        buf.value(),
        format!("see {}https://www.example.com/a", favicon("example.com"))
    );
    assert_eq!(h.titles.calls(), 0);
}

#[tokio::test]
async fn favicon_command_on_link() {
    let h = Harness::new(Settings {
        insert_favicons: true,
        ..Settings::default()
    });
    let text = "[Ex](https://example.com) and [Ex](https://docs.rs)";
    let buf = TextBuffer::with_selection(text, 30, text.len());

    h.converter.enhance_with_favicon(&buf).unwrap();

    assert_eq!(
        buf.value(),
        format!(
            "[Ex](https://example.com) and [{}Ex](https://docs.rs)",
            favicon("docs.rs")
        )
    );
}

#[tokio::test]
async fn favicon_command_respects_setting() {
    let h = Harness::new(Settings::default());
    let buf = TextBuffer::with_selection("https://example.com", 0, 19);

    h.converter.enhance_with_favicon(&buf).unwrap();

    assert_eq!(buf.value(), "https://example.com");
}

#[tokio::test]
async fn commands_dispatch_by_id() {
    let h = Harness::new(Settings::default());
    let buf = TextBuffer::new("");
    let clipboard = StaticClipboard("https://example.com/page".into());

    let normal: Command = "auto-link-title-normal-paste".parse().unwrap();
    h.converter
        .run_command(normal, &buf, &clipboard)
        .await
        .unwrap();
    assert_eq!(buf.value(), "https://example.com/page");

    let buf = TextBuffer::new("");
    h.converter
        .run_command(Command::PasteWithTitle, &buf, &clipboard)
        .await
        .unwrap();
    assert_eq!(buf.value(), "[Example Title](https://example.com/page)");
}
