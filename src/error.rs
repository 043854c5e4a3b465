use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `linktitle`.
///
/// Network and parse failures during a conversion never reach this type; they
/// degrade to sentinel text inside the document. What remains are the
/// conditions a caller can act on: unreadable settings, a selection that does
/// not have the expected link shape, or a host capability that failed.
#[derive(Debug, Error)]
pub enum LinkTitleError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Conversion ──────────────────────────────────────────────────────
    #[error("convert: {0}")]
    Convert(#[from] ConvertError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings from {path}: {message}")]
    Load { path: String, message: String },

    #[error("failed to save settings to {path}: {message}")]
    Save { path: String, message: String },

    #[error("could not determine a configuration directory")]
    NoConfigDir,

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Conversion errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("selection is not a markdown link: {0}")]
    MalformedLink(String),

    #[error("invalid link pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, LinkTitleError>;
