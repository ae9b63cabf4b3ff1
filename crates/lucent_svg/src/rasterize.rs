//! Icon rasterization using resvg for anti-aliased output
//!
//! Mounted icons are serialized, parsed by `usvg`, and rendered by `resvg`
//! into a `tiny-skia` pixmap scaled to fit the requested dimensions.

use std::fs;
use std::path::Path;

use lucent_core::{Color, SvgElement};
use tiny_skia::{Pixmap, Transform};
use usvg::{Options, Tree};

use crate::error::SvgError;

/// How colors are resolved while rasterizing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Value substituted for `currentColor`
    pub current_color: Color,
    /// Replaces the color of every painted pixel, keeping coverage
    pub tint: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            current_color: Color::BLACK,
            tint: None,
        }
    }
}

impl RasterOptions {
    pub fn current_color(mut self, color: Color) -> Self {
        self.current_color = color;
        self
    }

    pub fn tint(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }
}

/// Rasterized icon (premultiplied RGBA pixmap)
pub struct RasterizedIcon {
    pixmap: Pixmap,
}

impl RasterizedIcon {
    /// Rasterize a mounted icon
    ///
    /// The root gets a `color` attribute from `options.current_color` so
    /// `currentColor` strokes resolve to it.
    pub fn from_element(
        element: &SvgElement,
        width: u32,
        height: u32,
        options: &RasterOptions,
    ) -> Result<Self, SvgError> {
        let mut root = element.clone();
        root.attrs
            .set("color", options.current_color.to_hex_string());

        let mut rasterized = Self::from_str(&root.to_markup(), width, height)?;
        if let Some(tint) = options.tint {
            rasterized.apply_tint(tint);
        }
        Ok(rasterized)
    }

    /// Rasterize an SVG string to the specified size
    ///
    /// The SVG is scaled to fit within the given dimensions while
    /// maintaining aspect ratio, centered within the bounds.
    pub fn from_str(svg_str: &str, width: u32, height: u32) -> Result<Self, SvgError> {
        Self::from_data(svg_str.as_bytes(), width, height)
    }

    /// Rasterize SVG data to the specified size
    pub fn from_data(data: &[u8], width: u32, height: u32) -> Result<Self, SvgError> {
        check_dimensions(width, height)?;

        let options = Options::default();
        let tree = Tree::from_data(data, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

        Self::from_tree(&tree, width, height)
    }

    /// Rasterize a parsed usvg Tree to the specified size
    pub fn from_tree(tree: &Tree, width: u32, height: u32) -> Result<Self, SvgError> {
        check_dimensions(width, height)?;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(SvgError::InvalidDimensions { width, height })?;

        // Fit while maintaining aspect ratio
        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        // Center within the bounds
        let offset_x = (width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (height as f32 - svg_size.height() * scale) / 2.0;

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(tree, transform, &mut pixmap.as_mut());

        tracing::debug!(width, height, scale, "rasterized icon");
        Ok(Self { pixmap })
    }

    /// Replace the color of every painted pixel, keeping its coverage
    pub fn apply_tint(&mut self, tint: Color) {
        for chunk in self.pixmap.data_mut().chunks_exact_mut(4) {
            let alpha = chunk[3] as f32 / 255.0;
            if alpha > 0.0 {
                let final_a = alpha * tint.a;
                // Pixmap data stays premultiplied
                chunk[0] = ((tint.r * final_a) * 255.0).clamp(0.0, 255.0) as u8;
                chunk[1] = ((tint.g * final_a) * 255.0).clamp(0.0, 255.0) as u8;
                chunk[2] = ((tint.b * final_a) * 255.0).clamp(0.0, 255.0) as u8;
                chunk[3] = (final_a * 255.0).clamp(0.0, 255.0) as u8;
            }
        }
    }

    /// Premultiplied RGBA pixel data
    pub fn premultiplied(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha RGBA pixel data
    pub fn pixels(&self) -> Vec<u8> {
        unpremultiply_alpha(self.pixmap.data())
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Encode as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>, SvgError> {
        self.pixmap
            .encode_png()
            .map_err(|e| SvgError::Encode(e.to_string()))
    }

    /// Encode as PNG and write to `path`
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SvgError> {
        let data = self.encode_png()?;
        fs::write(path, data)?;
        Ok(())
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), SvgError> {
    if width == 0 || height == 0 {
        return Err(SvgError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Convert premultiplied alpha to straight alpha
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = (chunk[0] as f32 / a).min(255.0) as u8;
            let g = (chunk[1] as f32 / a).min(255.0) as u8;
            let b = (chunk[2] as f32 / a).min(255.0) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}
