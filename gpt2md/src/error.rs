//! Error types for conversation export.

use std::fmt;

/// Errors that can occur while exporting a conversation page.
///
/// The conversion pipeline itself never fails; these errors come from the
/// surrounding steps, which have to judge whether a page held a conversation
/// at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The page contains no conversation turn containers.
    NoTurnsFound,
    /// Turns were found but none carried any recognizable message content.
    NoContentExtracted,
    /// The URL does not belong to a ChatGPT conversation page.
    InvalidPage,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoTurnsFound => write!(
                f,
                "No conversation turns found. Make sure you're on a ChatGPT conversation page."
            ),
            ExportError::NoContentExtracted => {
                write!(f, "No content extracted from conversation")
            }
            ExportError::InvalidPage => {
                write!(f, "Please navigate to a ChatGPT conversation page first")
            }
        }
    }
}

impl std::error::Error for ExportError {}
