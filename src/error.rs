//! Error types shared by the library.
//!
//! Nothing here is fatal: every variant is shown inline by the UI and the
//! live state is left as it was.

use thiserror::Error;

/// Failure to obtain résumé content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content provider timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("content provider stopped without a result")]
    Disconnected,
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Control panel input that cannot become a content model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Skills format is incorrect. Use 'Category: Item1, Item2 | Category2: Item3...'.")]
    SkillsFormat,
}

/// Profile picture rejected or unreadable.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Please enter a valid URL (must start with http/https).")]
    InvalidUrl,
    #[error("The image link is invalid or cannot be loaded: {0}")]
    Unreachable(String),
    #[error("File size exceeds {}MB limit.", format_mib(*limit))]
    TooLarge { size: u64, limit: u64 },
    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image data: {0}")]
    Decode(String),
}

/// `limit` bytes in MiB: whole numbers bare, otherwise one decimal.
fn format_mib(limit: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if limit % MIB == 0 {
        (limit / MIB).to_string()
    } else {
        format!("{:.1}", limit as f64 / MIB as f64)
    }
}

/// Storage serialisation failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialise value: {0}")]
    Serialize(#[from] serde_json::Error),
}
