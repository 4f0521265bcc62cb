pub mod advisor;
pub mod fee;
pub mod locker;
pub mod predictor;
pub mod reminder;
pub mod shelf;
pub mod summarizer;
pub mod tabs;

use crate::errors::ApiError;
use crate::lifecycle::{Notice, Surface};

/// What a result container shows once nothing is pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Rendered Markdown, for `inner_html`.
    Html(String),
    /// Plain text, escaped on insertion.
    Text(String),
}

pub(crate) fn inline(notice: Option<&Notice>) -> Option<&Notice> {
    notice.filter(|n| n.surface == Surface::Inline)
}

/// `Error: <server text>` when the backend explained itself, otherwise `fallback`.
pub(crate) fn server_error_or(error: &ApiError, fallback: &str) -> String {
    match error.server_message() {
        Some(message) => format!("Error: {message}"),
        None => fallback.to_string(),
    }
}

/// Trimmed-empty check shared by every text precondition.
pub(crate) fn blank(value: &str) -> bool {
    value.trim().is_empty()
}
