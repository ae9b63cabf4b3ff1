//! Generates the icon table from `icons/*.svg`
//!
//! Each file becomes a `pub const` [`Icon`] whose geometry is the list of
//! child elements of the root `<svg>`. Root attributes are dropped: the
//! renderer supplies the canvas.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

struct ParsedNode {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<ParsedNode>,
}

struct ParsedIcon {
    name: String,
    const_name: String,
    nodes: Vec<ParsedNode>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let icons_dir = manifest_dir.join("icons");
    println!("cargo:rerun-if-changed={}", icons_dir.display());

    let mut icons = Vec::new();
    for entry in WalkDir::new(&icons_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.unwrap_or_else(|e| panic!("failed to walk {}: {}", icons_dir.display(), e));
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("svg") {
            continue;
        }
        println!("cargo:rerun-if-changed={}", path.display());
        icons.push(parse_icon(path));
    }

    icons.sort_by(|a, b| a.name.cmp(&b.name));

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("icons.rs"), generate(&icons)).unwrap();
}

fn parse_icon(path: &Path) -> ParsedIcon {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_else(|| panic!("icon file name is not UTF-8: {}", path.display()))
        .to_string();

    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        panic!("icon names must be kebab-case: {}", path.display());
    }

    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    let doc = roxmltree::Document::parse(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e));

    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        panic!("{}: root element must be <svg>", path.display());
    }

    let nodes = parse_children(root);
    if nodes.is_empty() {
        panic!("{}: icon has no geometry", path.display());
    }

    let mut const_name = name.replace('-', "_").to_ascii_uppercase();
    if const_name.starts_with(|c: char| c.is_ascii_digit()) {
        const_name.insert_str(0, "ICON_");
    }

    ParsedIcon {
        name,
        const_name,
        nodes,
    }
}

fn parse_children(node: roxmltree::Node) -> Vec<ParsedNode> {
    node.children()
        .filter(|n| n.is_element())
        .map(|n| ParsedNode {
            tag: n.tag_name().name().to_string(),
            attrs: n
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            children: parse_children(n),
        })
        .collect()
}

fn generate(icons: &[ParsedIcon]) -> String {
    let mut out = String::new();
    out.push_str("// Generated by build.rs from icons/*.svg - DO NOT EDIT\n\n");

    for icon in icons {
        writeln!(out, "/// {}", icon.name.replace('-', " ")).unwrap();
        write!(
            out,
            "pub const {}: Icon = Icon::new({:?}, &[",
            icon.const_name, icon.name
        )
        .unwrap();
        write_nodes(&mut out, &icon.nodes);
        out.push_str("]);\n\n");
    }

    out.push_str("/// Every icon, sorted by name\n");
    out.push_str("pub static ALL: &[&Icon] = &[\n");
    for icon in icons {
        writeln!(out, "    &{},", icon.const_name).unwrap();
    }
    out.push_str("];\n");

    out
}

fn write_nodes(out: &mut String, nodes: &[ParsedNode]) {
    for node in nodes {
        write!(out, "IconNode::group({:?}, &[", node.tag).unwrap();
        for (name, value) in &node.attrs {
            write!(out, "({:?}, {:?}), ", name, value).unwrap();
        }
        out.push_str("], &[");
        write_nodes(out, &node.children);
        out.push_str("]), ");
    }
}
