//! RGBA color and CSS color parsing
//!
//! Icon colors travel through the prop contract as strings (so
//! `currentColor` and arbitrary CSS colors pass through untouched). This type
//! is only needed where a concrete color is required, e.g. rasterization.

use crate::error::IconError;

/// Straight-alpha RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse a CSS color
    ///
    /// Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and a handful of
    /// named colors. Returns `Ok(None)` for `currentColor`, which has no
    /// concrete value until a host supplies one.
    pub fn parse_css(value: &str) -> Result<Option<Self>, IconError> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("currentcolor") {
            return Ok(None);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex)
                .map(Some)
                .ok_or_else(|| IconError::InvalidColor(value.to_string()));
        }

        let named = match value.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "gray" | "grey" => Color::GRAY,
            "transparent" => Color::TRANSPARENT,
            _ => return Err(IconError::InvalidColor(value.to_string())),
        };
        Ok(Some(named))
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let unit = |v: u8| v as f32 / 255.0;

    match hex.len() {
        3 | 4 => {
            let mut channels = [255u8; 4];
            for (i, channel) in channels.iter_mut().take(hex.len()).enumerate() {
                let d = digit(i)?;
                *channel = d * 17;
            }
            Some(Color::rgba(
                unit(channels[0]),
                unit(channels[1]),
                unit(channels[2]),
                unit(channels[3]),
            ))
        }
        6 | 8 => {
            let a = if hex.len() == 8 { pair(6)? } else { 255 };
            Some(Color::rgba(unit(pair(0)?), unit(pair(2)?), unit(pair(4)?), unit(a)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse_css("#fff").unwrap(), Some(Color::WHITE));
        assert_eq!(Color::parse_css("#000000").unwrap(), Some(Color::BLACK));
        assert_eq!(Color::parse_css("#ff000080").unwrap().unwrap().a, 128.0 / 255.0);
        assert_eq!(Color::parse_css("#f008").unwrap().unwrap().a, 136.0 / 255.0);
    }

    #[test]
    fn test_parse_named_and_current_color() {
        assert_eq!(Color::parse_css("currentColor").unwrap(), None);
        assert_eq!(Color::parse_css(" Red ").unwrap(), Some(Color::RED));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::parse_css("#12").is_err());
        assert!(Color::parse_css("#gggggg").is_err());
        assert!(Color::parse_css("chartreuse-ish").is_err());
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(Color::from_hex(0x334155).to_hex_string(), "#334155");
        assert_eq!(Color::BLACK.with_alpha(0.0).to_hex_string(), "#00000000");
    }
}
