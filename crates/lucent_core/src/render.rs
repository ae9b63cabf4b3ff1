//! Shared icon rendering
//!
//! Every icon goes through the same steps: resolve the style, walk the
//! geometry, default `stroke`/`fill` on shape primitives, and mount the result
//! in a 24x24 canvas.

use crate::case::merge_classes;
use crate::config::{IconConfig, ROOT_ATTRIBUTES};
use crate::node::{IconNode, SvgElement, Tag};
use crate::props::{IconProps, ResolvedStyle};

/// Base class carried by every mounted icon
pub const BASE_CLASS: &str = "lucide";

/// Turn geometry into output elements
///
/// Attributes are copied in order. Shape primitives get `stroke` set to the
/// resolved color and `fill` set to `none` when the geometry leaves them
/// unset. Other tags keep exactly the attributes they were given; their
/// children are still walked.
pub fn render_nodes(nodes: &[IconNode], style: &ResolvedStyle) -> Vec<SvgElement> {
    nodes.iter().map(|node| render_node(node, style)).collect()
}

fn render_node(node: &IconNode, style: &ResolvedStyle) -> SvgElement {
    let tag = Tag::parse(node.tag);
    let mut element = SvgElement::new(tag);

    for (name, value) in node.attrs {
        element.attrs.set(*name, *value);
    }

    if element.tag.is_shape() {
        element.attrs.set_default("stroke", style.color.as_str());
        element.attrs.set_default("fill", "none");
    }

    element.children = render_nodes(node.children, style);
    element
}

/// Mount geometry inside the root `<svg>` canvas
///
/// `name` is the kebab-case icon name, used for the `lucide-<name>` class.
pub fn mount(
    name: &str,
    nodes: &[IconNode],
    props: &IconProps,
    config: &IconConfig,
) -> SvgElement {
    let style = ResolvedStyle::resolve(props, config);
    tracing::debug!(
        icon = name,
        size = style.size,
        color = %style.color,
        stroke_width = style.stroke_width,
        absolute = style.absolute_stroke_width,
        "mounting icon"
    );

    let mut root = SvgElement::new(Tag::Svg);
    for (attr, value) in ROOT_ATTRIBUTES {
        root.attrs.set(*attr, *value);
    }

    let size = format_number(style.size);
    root.attrs.set("width", size.clone());
    root.attrs.set("height", size);
    root.attrs.set("stroke", style.color.as_str());
    root.attrs
        .set("stroke-width", format_number(style.effective_stroke_width()));

    let icon_class = format!("{}-{}", BASE_CLASS, name);
    let class = merge_classes([
        BASE_CLASS,
        icon_class.as_str(),
        config.class.as_deref().unwrap_or(""),
        props.class.as_deref().unwrap_or(""),
    ]);
    root.attrs.set("class", class);

    root.attrs.extend(&props.attrs);

    if props.children.is_empty() && !props.has_aria_attr() {
        root.attrs.set("aria-hidden", "true");
    }

    root.children = render_nodes(nodes, &style);
    root.children.extend(props.children.iter().cloned());

    if let Some(node_ref) = &props.node_ref {
        node_ref.bind(&root);
    }

    root
}

/// Format a number the way it appears in markup (`2`, `1.5`, `0.6666667`)
pub fn format_number(value: f32) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_ref::ElementRef;

    const GEOMETRY: &[IconNode] = &[
        IconNode::leaf("circle", &[("cx", "12"), ("cy", "13"), ("r", "8")]),
        IconNode::leaf("path", &[("d", "M12 9v4l2 2"), ("stroke", "red")]),
        IconNode::leaf("rect", &[("x", "3"), ("y", "3"), ("fill", "currentColor")]),
    ];

    const NESTED: &[IconNode] = &[IconNode::group(
        "g",
        &[("opacity", "0.5")],
        &[IconNode::leaf("line", &[("x1", "0"), ("x2", "24")])],
    )];

    fn style(color: &str) -> ResolvedStyle {
        ResolvedStyle {
            color: color.to_string(),
            ..ResolvedStyle::default()
        }
    }

    #[test]
    fn test_shape_defaults_injected() {
        let out = render_nodes(GEOMETRY, &style("blue"));
        assert_eq!(out.len(), 3);

        let circle = &out[0];
        assert_eq!(circle.get_attr("stroke"), Some("blue"));
        assert_eq!(circle.get_attr("fill"), Some("none"));
        assert_eq!(circle.get_attr("r"), Some("8"));
    }

    #[test]
    fn test_existing_attributes_win() {
        let out = render_nodes(GEOMETRY, &style("blue"));
        assert_eq!(out[1].get_attr("stroke"), Some("red"));
        assert_eq!(out[1].get_attr("fill"), Some("none"));
        assert_eq!(out[2].get_attr("fill"), Some("currentColor"));
        assert_eq!(out[2].get_attr("stroke"), Some("blue"));
    }

    #[test]
    fn test_output_equals_input_except_defaults() {
        let out = render_nodes(GEOMETRY, &style("blue"));
        for (node, element) in GEOMETRY.iter().zip(&out) {
            for (name, value) in node.attrs {
                assert_eq!(element.get_attr(name), Some(*value));
            }
            let extra: Vec<_> = element
                .attrs
                .keys()
                .filter(|k| node.attr(k).is_none())
                .collect();
            assert!(extra.iter().all(|k| *k == "stroke" || *k == "fill"));
        }
    }

    #[test]
    fn test_non_shape_passes_through() {
        let out = render_nodes(NESTED, &style("green"));
        let group = &out[0];
        assert_eq!(group.tag, Tag::G);
        assert_eq!(group.attrs.len(), 1);
        assert_eq!(group.get_attr("opacity"), Some("0.5"));

        let line = &group.children[0];
        assert_eq!(line.get_attr("stroke"), Some("green"));
        assert_eq!(line.get_attr("fill"), Some("none"));
    }

    #[test]
    fn test_unknown_tag_untouched() {
        const TEXT: &[IconNode] = &[IconNode::leaf("text", &[("x", "1")])];
        let out = render_nodes(TEXT, &style("blue"));
        assert_eq!(out[0].attrs.len(), 1);
        assert!(out[0].get_attr("stroke").is_none());
    }

    #[test]
    fn test_mount_root_attributes() {
        let props = IconProps::new().size(48.0).color("#123456");
        let root = mount("alarm-clock", GEOMETRY, &props, &IconConfig::default());

        assert_eq!(root.tag, Tag::Svg);
        assert_eq!(root.get_attr("xmlns"), Some("http://www.w3.org/2000/svg"));
        assert_eq!(root.get_attr("viewBox"), Some("0 0 24 24"));
        assert_eq!(root.get_attr("width"), Some("48"));
        assert_eq!(root.get_attr("height"), Some("48"));
        assert_eq!(root.get_attr("fill"), Some("none"));
        assert_eq!(root.get_attr("stroke"), Some("#123456"));
        assert_eq!(root.get_attr("stroke-width"), Some("2"));
        assert_eq!(root.get_attr("stroke-linecap"), Some("round"));
        assert_eq!(root.get_attr("stroke-linejoin"), Some("round"));
        assert_eq!(root.get_attr("class"), Some("lucide lucide-alarm-clock"));
        assert_eq!(root.get_attr("aria-hidden"), Some("true"));
        assert_eq!(root.count_nodes(), GEOMETRY.len() + 1);
    }

    #[test]
    fn test_mount_absolute_stroke_width() {
        let props = IconProps::new()
            .size(48.0)
            .stroke_width(3.0)
            .absolute_stroke_width(true);
        let root = mount("x", GEOMETRY, &props, &IconConfig::default());
        assert_eq!(root.get_attr("stroke-width"), Some("1.5"));
    }

    #[test]
    fn test_mount_degenerate_size_uses_default() {
        for size in [f32::NAN, -8.0, 0.0] {
            let props = IconProps::new().size(size).absolute_stroke_width(true);
            let root = mount("x", GEOMETRY, &props, &IconConfig::default());
            assert_eq!(root.get_attr("width"), Some("24"));
            assert_eq!(root.get_attr("height"), Some("24"));
            assert_eq!(root.get_attr("stroke-width"), Some("2"));
        }
    }

    #[test]
    fn test_mount_classes_and_passthrough() {
        let config = IconConfig::default().class("icon");
        let props = IconProps::new()
            .class("icon big")
            .attr("fill", "currentColor")
            .attr("aria-label", "Alarm");
        let root = mount("alarm-clock", GEOMETRY, &props, &config);

        assert_eq!(
            root.get_attr("class"),
            Some("lucide lucide-alarm-clock icon big")
        );
        assert_eq!(root.get_attr("fill"), Some("currentColor"));
        assert_eq!(root.get_attr("aria-label"), Some("Alarm"));
        assert!(root.get_attr("aria-hidden").is_none());
    }

    #[test]
    fn test_mount_extra_children() {
        let badge = SvgElement::new(Tag::Circle).attr("r", "2");
        let props = IconProps::new().child(badge.clone());
        let root = mount("x", GEOMETRY, &props, &IconConfig::default());

        assert_eq!(root.children.len(), GEOMETRY.len() + 1);
        assert_eq!(root.children.last(), Some(&badge));
        assert!(root.get_attr("aria-hidden").is_none());
    }

    #[test]
    fn test_mount_binds_ref() {
        let node_ref = ElementRef::new();
        let props = IconProps::new().node_ref(node_ref.clone());
        let root = mount("x", GEOMETRY, &props, &IconConfig::default());

        assert_eq!(node_ref.get(), Some(root));
        assert_eq!(node_ref.generation(), 1);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(24.0 * 2.0 / 48.0), "1");
    }
}
