pub mod hot_reload;
pub mod schema;

pub use hot_reload::{SettingsHandle, SettingsProvider};
pub use schema::{DEFAULT_LINK_REGEX, Settings};
