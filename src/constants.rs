//! Application constants and configuration

pub const APP_NAME: &str = "Quote Search";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const API_BASE_URL: &str = "https://api.quotable.io/";
pub const SEARCH_PATH: &str = "search/quotes";
pub const DEFAULT_RESULT_LIMIT: u32 = 5;

/// Overrides the configured base URL when set
pub const BASE_URL_ENV: &str = "QUOTE_SEARCH_BASE_URL";

// User-facing strings
pub const EMPTY_QUERY_NOTICE: &str = "Enter a query";
pub const LOAD_ERROR_PREFIX: &str = "Load error";
pub const CONNECTION_ERROR_PREFIX: &str = "Connection error";
pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const IDLE_HINT: &str = "Enter a query and press search";
pub const NOTHING_FOUND: &str = "Nothing found";
pub const LOADING_TEXT: &str = "Loading...";
pub const SEARCH_HINT: &str = "Enter text to search";
