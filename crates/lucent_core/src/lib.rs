//! Lucent Core
//!
//! Shared machinery behind every Lucent icon:
//!
//! - **Primitives**: [`IconNode`] geometry and the [`SvgElement`] output tree
//! - **Props**: [`IconProps`] resolved through [`IconConfig`] and hard-coded
//!   fallbacks into a [`ResolvedStyle`]
//! - **Rendering**: [`render_nodes`] defaults `stroke`/`fill` on shape
//!   primitives, [`mount`] wraps the result in a 24x24 canvas
//! - **References**: [`ElementRef`] receives the mounted root
//!
//! # Example
//!
//! ```rust
//! use lucent_core::{create_icon, Icon, IconNode, IconProps};
//!
//! const MINUS: Icon = create_icon("minus", &[IconNode::leaf("path", &[("d", "M5 12h14")])]);
//!
//! let svg = MINUS.to_svg(&IconProps::new().size(32.0).color("#334155"));
//! assert!(svg.contains(r#"width="32""#));
//! assert!(svg.contains(r##"<path d="M5 12h14" stroke="#334155" fill="none"/>"##));
//! ```

pub mod case;
pub mod color;
pub mod config;
pub mod element_ref;
pub mod error;
pub mod icon;
mod markup;
pub mod node;
pub mod props;
pub mod render;

pub use case::{merge_classes, to_kebab_case, to_pascal_case};
pub use color::Color;
pub use config::{
    global_config, reset_global_config, set_global_config, IconConfig, DEFAULT_ABSOLUTE_STROKE_WIDTH,
    DEFAULT_COLOR, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH, ROOT_ATTRIBUTES, VIEWBOX_SIZE,
};
pub use element_ref::ElementRef;
pub use error::IconError;
pub use icon::{create_icon, Icon};
pub use node::{Attributes, IconNode, SvgElement, Tag};
pub use props::{IconProps, ResolvedStyle};
pub use render::{format_number, mount, render_nodes};
