//! Icon props and style resolution

use crate::config::{
    IconConfig, DEFAULT_ABSOLUTE_STROKE_WIDTH, DEFAULT_COLOR, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH,
    VIEWBOX_SIZE,
};
use crate::element_ref::ElementRef;
use crate::node::{Attributes, SvgElement};

/// Explicit props for a single icon render
///
/// ```rust
/// use lucent_core::IconProps;
///
/// let props = IconProps::new()
///     .size(32.0)
///     .color("#334155")
///     .stroke_width(1.5)
///     .absolute_stroke_width(true)
///     .attr("data-testid", "save");
/// ```
#[derive(Clone, Debug, Default)]
pub struct IconProps {
    pub size: Option<f32>,
    pub color: Option<String>,
    pub stroke_width: Option<f32>,
    pub absolute_stroke_width: Option<bool>,
    pub class: Option<String>,
    /// Pass-through attributes for the root `<svg>`; these win over everything
    pub attrs: Attributes,
    /// Extra nodes appended after the icon geometry
    pub children: Vec<SvgElement>,
    /// Bound to the mounted root
    pub node_ref: Option<ElementRef>,
}

impl IconProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width and height in output units
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Stroke color (any CSS color string)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Keep the rendered stroke at `stroke_width` output units regardless of size
    pub fn absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn node_ref(mut self, node_ref: ElementRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Whether any `aria-*` attribute was passed through
    pub fn has_aria_attr(&self) -> bool {
        self.attrs.keys().any(|name| name.starts_with("aria-"))
    }
}

/// Effective visual parameters after the fallback chain
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub size: f32,
    pub color: String,
    /// Stroke width as requested, before absolute scaling
    pub stroke_width: f32,
    pub absolute_stroke_width: bool,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            absolute_stroke_width: DEFAULT_ABSOLUTE_STROKE_WIDTH,
        }
    }
}

impl ResolvedStyle {
    /// props -> config -> constant, per parameter
    ///
    /// A size that is not finite or not positive falls back to `DEFAULT_SIZE`.
    pub fn resolve(props: &IconProps, config: &IconConfig) -> Self {
        Self {
            size: sanitize_size(props.size.or(config.size).unwrap_or(DEFAULT_SIZE)),
            color: props
                .color
                .clone()
                .or_else(|| config.color.clone())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            stroke_width: props
                .stroke_width
                .or(config.stroke_width)
                .unwrap_or(DEFAULT_STROKE_WIDTH),
            absolute_stroke_width: props
                .absolute_stroke_width
                .or(config.absolute_stroke_width)
                .unwrap_or(DEFAULT_ABSOLUTE_STROKE_WIDTH),
        }
    }

    /// Stroke width in viewBox units
    ///
    /// Relative mode scales with the canvas, so the requested width is used
    /// as-is. Absolute mode divides out the canvas scale (`size / 24`) so the
    /// drawn stroke stays `stroke_width` output units wide.
    pub fn effective_stroke_width(&self) -> f32 {
        if !self.absolute_stroke_width {
            return self.stroke_width;
        }

        if !self.size.is_finite() || self.size <= 0.0 {
            tracing::warn!(
                size = self.size,
                "absolute stroke width needs a positive size, using the unscaled width"
            );
            return self.stroke_width;
        }

        self.stroke_width * VIEWBOX_SIZE / self.size
    }
}

fn sanitize_size(size: f32) -> f32 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        tracing::warn!(size, "icon size must be positive, using {}", DEFAULT_SIZE);
        DEFAULT_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hard_coded_fallbacks() {
        let style = ResolvedStyle::resolve(&IconProps::new(), &IconConfig::default());
        assert_eq!(style, ResolvedStyle::default());
        assert_eq!(style.color, "currentColor");
        assert_eq!(style.effective_stroke_width(), 2.0);
    }

    #[test]
    fn test_resolve_config_over_fallback() {
        let config = IconConfig::default().size(48.0).color("red");
        let style = ResolvedStyle::resolve(&IconProps::new(), &config);
        assert_eq!(style.size, 48.0);
        assert_eq!(style.color, "red");
        assert_eq!(style.stroke_width, 2.0);
    }

    #[test]
    fn test_resolve_props_over_config() {
        let config = IconConfig::default()
            .size(48.0)
            .color("red")
            .absolute_stroke_width(true);
        let props = IconProps::new().size(16.0).absolute_stroke_width(false);

        let style = ResolvedStyle::resolve(&props, &config);
        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, "red");
        assert!(!style.absolute_stroke_width);
    }

    #[test]
    fn test_relative_stroke_ignores_size() {
        let props = IconProps::new().size(48.0).stroke_width(2.0);
        let style = ResolvedStyle::resolve(&props, &IconConfig::default());
        assert_eq!(style.effective_stroke_width(), 2.0);
    }

    #[test]
    fn test_absolute_stroke_scales_inverse_to_size() {
        let props = IconProps::new()
            .size(48.0)
            .stroke_width(2.0)
            .absolute_stroke_width(true);
        let style = ResolvedStyle::resolve(&props, &IconConfig::default());
        assert_eq!(style.effective_stroke_width(), 1.0);

        let small = ResolvedStyle {
            size: 12.0,
            ..style
        };
        assert_eq!(small.effective_stroke_width(), 4.0);
    }

    #[test]
    fn test_absolute_stroke_with_degenerate_size() {
        for size in [0.0, -8.0, f32::NAN, f32::INFINITY] {
            let style = ResolvedStyle {
                size,
                stroke_width: 1.5,
                absolute_stroke_width: true,
                ..ResolvedStyle::default()
            };
            assert_eq!(style.effective_stroke_width(), 1.5);
        }
    }

    #[test]
    fn test_resolve_replaces_degenerate_size() {
        for size in [0.0, -8.0, f32::NAN, f32::NEG_INFINITY] {
            let style = ResolvedStyle::resolve(&IconProps::new().size(size), &IconConfig::default());
            assert_eq!(style.size, DEFAULT_SIZE);
        }

        let config = IconConfig::default().size(f32::NAN);
        let style = ResolvedStyle::resolve(&IconProps::new(), &config);
        assert_eq!(style.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_aria_detection() {
        assert!(!IconProps::new().attr("role", "img").has_aria_attr());
        assert!(IconProps::new().attr("aria-label", "Save").has_aria_attr());
    }
}
