pub mod blacklist;
pub mod classify;
pub mod favicon;
pub mod fetch;
pub mod sanitize;
pub mod search;

pub use blacklist::Blacklist;
pub use classify::{LinkPattern, hostname, is_image, is_linked_url, is_url, is_web_url};
pub use favicon::{FaviconPlacement, favicon_tag, insert_favicon};
pub use fetch::{HtmlTitleFetcher, SITE_UNREACHABLE, TitleSource};
pub use sanitize::{escape_markdown, shorten_title};
pub use search::{CustomSearchResolver, SEARCH_ERROR, SearchSource};
