//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Per-user data directory holding settings and logs
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Singular/plural label for a result count
pub fn format_result_count(count: usize) -> String {
    match count {
        1 => "1 quote".to_string(),
        n => format!("{} quotes", n),
    }
}
