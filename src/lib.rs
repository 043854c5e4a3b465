#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Turn pasted or dropped URLs into markdown links titled after the page.
//!
//! The host editor, clipboard and connectivity are capabilities the crate
//! calls into ([`editor::Editor`], [`host`]); [`convert::LinkConverter`] wires
//! them to the link pipeline in [`links`].

pub mod config;
pub mod convert;
pub mod editor;
pub mod error;
pub mod host;
pub mod links;

pub use config::{Settings, SettingsHandle, SettingsProvider};
pub use convert::{EventOutcome, LinkConverter, PasteContext, PasteKind};
pub use error::{ConfigError, ConvertError, LinkTitleError};
