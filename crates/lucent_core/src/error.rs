//! Icon error types

use thiserror::Error;

/// Errors surfaced by the icon core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// No icon is registered under the requested name
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    /// A color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
