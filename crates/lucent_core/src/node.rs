//! SVG drawing primitives
//!
//! Two representations live here:
//! - [`IconNode`] - static geometry, constructible in `const` context so the
//!   generated icon table costs nothing at runtime
//! - [`SvgElement`] - owned output tree produced by the renderer

use std::fmt;

use indexmap::IndexMap;

/// An SVG element tag
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    // Shape primitives
    Path,
    Circle,
    Rect,
    Line,
    Polyline,
    Polygon,
    Ellipse,

    // Structural / grouping
    Svg,
    G,
    Defs,
    ClipPath,
    Mask,
    Title,
    Desc,
    Use,
    Symbol,

    /// Any tag not listed above (never treated as a shape)
    Other(String),
}

impl Tag {
    /// Parse a tag name. Unknown names become [`Tag::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "path" => Tag::Path,
            "circle" => Tag::Circle,
            "rect" => Tag::Rect,
            "line" => Tag::Line,
            "polyline" => Tag::Polyline,
            "polygon" => Tag::Polygon,
            "ellipse" => Tag::Ellipse,
            "svg" => Tag::Svg,
            "g" => Tag::G,
            "defs" => Tag::Defs,
            "clipPath" => Tag::ClipPath,
            "mask" => Tag::Mask,
            "title" => Tag::Title,
            "desc" => Tag::Desc,
            "use" => Tag::Use,
            "symbol" => Tag::Symbol,
            other => Tag::Other(other.to_string()),
        }
    }

    /// The tag name as written in markup
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Path => "path",
            Tag::Circle => "circle",
            Tag::Rect => "rect",
            Tag::Line => "line",
            Tag::Polyline => "polyline",
            Tag::Polygon => "polygon",
            Tag::Ellipse => "ellipse",
            Tag::Svg => "svg",
            Tag::G => "g",
            Tag::Defs => "defs",
            Tag::ClipPath => "clipPath",
            Tag::Mask => "mask",
            Tag::Title => "title",
            Tag::Desc => "desc",
            Tag::Use => "use",
            Tag::Symbol => "symbol",
            Tag::Other(name) => name,
        }
    }

    /// Whether this tag receives automatic stroke/fill defaults
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Tag::Path
                | Tag::Circle
                | Tag::Rect
                | Tag::Line
                | Tag::Polyline
                | Tag::Polygon
                | Tag::Ellipse
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static geometry entry: tag, attributes, and nested nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconNode {
    pub tag: &'static str,
    pub attrs: &'static [(&'static str, &'static str)],
    pub children: &'static [IconNode],
}

impl IconNode {
    /// A node without children
    pub const fn leaf(tag: &'static str, attrs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            tag,
            attrs,
            children: &[],
        }
    }

    /// A node wrapping other nodes
    pub const fn group(
        tag: &'static str,
        attrs: &'static [(&'static str, &'static str)],
        children: &'static [IconNode],
    ) -> Self {
        Self {
            tag,
            attrs,
            children,
        }
    }

    /// Look up an attribute value
    pub fn attr(&self, name: &str) -> Option<&'static str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

/// Ordered attribute map
///
/// Insertion order is preserved so output markup lists attributes in the
/// order they were written in the geometry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Insert an attribute only if it is absent. Returns whether it was inserted.
    pub fn set_default(&mut self, name: &str, value: impl Into<String>) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), value.into());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Remove an attribute, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every attribute of `other`, replacing existing values
    pub fn extend(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// An owned SVG element in the rendered output tree
#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    pub tag: Tag,
    pub attrs: Attributes,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute (builder style)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Append a child (builder style)
    pub fn child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }

    /// Depth-first search for every descendant (including self) with `tag`
    pub fn find_all(&self, tag: &Tag) -> Vec<&SvgElement> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &Tag, found: &mut Vec<&'a SvgElement>) {
        if &self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect(tag, found);
        }
    }

    /// Total number of elements in this subtree, including self
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(SvgElement::count_nodes).sum::<usize>()
    }
}

impl From<&IconNode> for SvgElement {
    fn from(node: &IconNode) -> Self {
        Self {
            tag: Tag::parse(node.tag),
            attrs: node.attrs.iter().copied().collect(),
            children: node.children.iter().map(SvgElement::from).collect(),
        }
    }
}
