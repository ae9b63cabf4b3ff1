//! Icon rasterization for Lucent
//!
//! Renders mounted icons to pixels with `usvg` + `resvg` + `tiny-skia`, for
//! hosts that cannot display SVG directly.
//!
//! # Example
//!
//! ```ignore
//! use lucent_core::IconProps;
//! use lucent_svg::{RasterOptions, RasterizedIcon};
//!
//! let root = lucent_icons::HEART.render(&IconProps::new().size(64.0));
//! RasterizedIcon::from_element(&root, 64, 64, &RasterOptions::default())?
//!     .save_png("heart.png")?;
//! ```

mod error;
mod rasterize;

pub use error::SvgError;
pub use rasterize::{RasterOptions, RasterizedIcon};
