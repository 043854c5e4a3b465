use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use linktitle::config::{Settings, SettingsHandle, SettingsProvider};
use linktitle::convert::{Command, LinkConverter};
use linktitle::editor::TextBuffer;
use linktitle::host::{Clipboard, StaticClipboard, StderrNotifier, StdinClipboard};
use linktitle::links::{escape_markdown, favicon_tag, is_web_url, shorten_title};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn settings_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(PathBuf::from(shellexpand::tilde(path).into_owned())),
        None => Ok(Settings::default_path()?),
    }
}

fn require_url(url: &str) -> Result<()> {
    if !is_web_url(url) {
        bail!("not an absolute http(s) URL: {url}");
    }
    Ok(())
}

/// Apply `command` to `file` with `from..to` selected, writing the result back.
async fn edit_file(
    converter: &LinkConverter,
    file: &Path,
    from: usize,
    to: usize,
    command: Command,
    clipboard: &dyn Clipboard,
) -> Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    if from > to || !text.is_char_boundary(from) || !text.is_char_boundary(to) {
        bail!(
            "selection {from}..{to} is not a valid range in {} ({} bytes)",
            file.display(),
            text.len()
        );
    }

    let buffer = TextBuffer::with_selection(text, from, to);
    converter.run_command(command, &buffer, clipboard).await?;

    tokio::fs::write(file, buffer.into_text())
        .await
        .with_context(|| format!("Failed to write {}", file.display()))?;
    Ok(())
}

pub async fn dispatch(cli: Cli) -> Result<()> {
    let path = settings_path(&cli)?;
    let mut settings = Settings::load_or_init(&path)?;
    settings.apply_env_overrides();
    let handle = Arc::new(SettingsHandle::new(settings, &path));
    let converter = LinkConverter::new(handle.clone(), Arc::new(StderrNotifier));

    match cli.command {
        Commands::Title { url } => {
            let max_len = handle.current().maximum_title_length;
            let title = converter.fetch_url_title(&url).await;
            println!("{}", shorten_title(&escape_markdown(&title), max_len));
        }
        Commands::Convert { url } => {
            require_url(&url)?;
            let buffer = TextBuffer::new("");
            converter.convert_url_to_titled_link(&buffer, &url).await;
            println!("{}", buffer.into_text());
        }
        Commands::Search { query } => {
            let query = query.join(" ");
            let buffer = TextBuffer::with_selection(query.clone(), 0, query.len());
            converter.fetch_first_search_result(&buffer).await;
            println!("{}", buffer.into_text());
        }
        Commands::Favicon { url } => {
            let tag = favicon_tag(&url).with_context(|| format!("no host in {url}"))?;
            println!("{tag}");
        }
        Commands::Paste {
            file,
            offset,
            end,
            text,
        } => {
            let clipboard: Box<dyn Clipboard> = match text {
                Some(text) => Box::new(StaticClipboard(text)),
                None => Box::new(StdinClipboard),
            };
            let end = end.unwrap_or(offset);
            edit_file(
                &converter,
                &file,
                offset,
                end,
                Command::PasteWithTitle,
                clipboard.as_ref(),
            )
            .await?;
        }
        Commands::Enhance {
            file,
            offset,
            end,
            favicon,
        } => {
            let command = if favicon {
                Command::EnhanceWithFavicon
            } else {
                Command::EnhanceUrl
            };
            edit_file(
                &converter,
                &file,
                offset,
                end,
                command,
                &StaticClipboard::default(),
            )
            .await?;
        }
        Commands::Config => {
            println!("# {}", path.display());
            print!(
                "{}",
                toml::to_string_pretty(&*handle.current())
                    .context("Failed to serialize settings")?
            );
        }
    }
    Ok(())
}
