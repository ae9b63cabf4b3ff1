//! Rasterization error types

use std::io;
use thiserror::Error;

/// Errors that can occur when rasterizing icons
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// Zero-sized target
    #[error("Invalid dimensions {width}x{height}: width and height must be > 0")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding error
    #[error("PNG encoding error: {0}")]
    Encode(String),
}
