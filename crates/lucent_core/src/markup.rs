//! SVG markup serialization

use std::fmt::{self, Write};

use crate::node::SvgElement;

impl SvgElement {
    /// Serialize this element and its subtree
    pub fn to_markup(&self) -> String {
        self.to_string()
    }

    /// Serialize only the children, e.g. the geometry of a mounted icon
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            // Writing into a String cannot fail
            let _ = write!(out, "{}", child);
        }
        out
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in self.attrs.iter() {
            if !is_valid_attr_name(name) {
                tracing::warn!(name = %name, tag = %self.tag, "skipping invalid attribute name");
                continue;
            }
            write!(f, " {}=\"", name)?;
            write_escaped(f, value)?;
            f.write_char('"')?;
        }

        if self.children.is_empty() {
            return f.write_str("/>");
        }

        f.write_char('>')?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// XML attribute names cannot be empty or carry whitespace, quotes or markup
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '&')
        })
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
