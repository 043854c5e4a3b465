//! Host capabilities beyond the editor: clipboard, notifications, connectivity.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Read access to the system clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn read_text(&self) -> Result<String>;
}

/// Transient user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Whether the host currently has network access.
pub trait NetworkStatus: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Clipboard holding a fixed string.
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard(pub String);

#[async_trait]
impl Clipboard for StaticClipboard {
    async fn read_text(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Clipboard contents taken from standard input.
#[derive(Debug, Default)]
pub struct StdinClipboard;

#[async_trait]
impl Clipboard for StdinClipboard {
    async fn read_text(&self) -> Result<String> {
        use anyhow::Context;
        use tokio::io::AsyncReadExt;

        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read clipboard text from stdin")?;
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Notifier that prints to stderr, for the CLI.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Notifier that keeps every message, for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut guard) = self.messages.lock() {
            guard.push(message.to_string());
        }
    }
}

/// Connectivity flag that can be flipped at runtime.
#[derive(Debug)]
pub struct Connectivity {
    online: AtomicBool,
}

impl Connectivity {
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NetworkStatus for Connectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}
