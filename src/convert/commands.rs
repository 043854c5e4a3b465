use super::{LinkConverter, PasteKind};
use crate::editor::Editor;
use crate::error::ConvertError;
use crate::host::Clipboard;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Cmd on macOS, Ctrl elsewhere.
    Mod,
    Shift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: &'static [Modifier],
    pub key: char,
}

/// Registration data a host needs to expose a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub hotkey: Option<Hotkey>,
}

/// User-facing commands, identified by their stable ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Command {
    #[strum(serialize = "auto-link-title-paste")]
    PasteWithTitle,
    #[strum(serialize = "auto-link-title-normal-paste")]
    NormalPaste,
    #[strum(serialize = "enhance-url-with-title")]
    EnhanceUrl,
    #[strum(serialize = "fetch-first-link")]
    FetchFirstLink,
    #[strum(serialize = "enhance-with-favicon")]
    EnhanceWithFavicon,
}

const MOD_SHIFT: &[Modifier] = &[Modifier::Mod, Modifier::Shift];

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::PasteWithTitle,
        name: "Paste URL and auto fetch title",
        hotkey: None,
    },
    CommandSpec {
        command: Command::NormalPaste,
        name: "Normal paste (no fetching behavior)",
        hotkey: Some(Hotkey {
            modifiers: MOD_SHIFT,
            key: 'v',
        }),
    },
    CommandSpec {
        command: Command::EnhanceUrl,
        name: "Enhance existing URL with link and title",
        hotkey: Some(Hotkey {
            modifiers: MOD_SHIFT,
            key: 'e',
        }),
    },
    CommandSpec {
        command: Command::FetchFirstLink,
        name: "Fetch first search result of selected text",
        hotkey: None,
    },
    CommandSpec {
        command: Command::EnhanceWithFavicon,
        name: "Enhance link with favicon",
        hotkey: None,
    },
];

impl Command {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn spec(self) -> &'static CommandSpec {
        COMMANDS
            .iter()
            .find(|spec| spec.command == self)
            .unwrap_or(&COMMANDS[0])
    }
}

impl LinkConverter {
    /// Run `command` against the editor.
    pub async fn run_command(
        &self,
        command: Command,
        editor: &dyn Editor,
        clipboard: &dyn Clipboard,
    ) -> Result<(), ConvertError> {
        tracing::debug!(%command, kind = %PasteKind::ManualCommand, "running command");
        match command {
            Command::PasteWithTitle => self.manual_paste(editor, clipboard).await,
            Command::NormalPaste => self.normal_paste(editor, clipboard).await,
            Command::EnhanceUrl => self.enhance_existing_link(editor).await,
            Command::FetchFirstLink => {
                self.fetch_first_search_result(editor).await;
                Ok(())
            }
            Command::EnhanceWithFavicon => self.enhance_with_favicon(editor),
        }
    }
}
