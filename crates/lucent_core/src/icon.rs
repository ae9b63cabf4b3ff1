//! Icon components

use crate::case::to_pascal_case;
use crate::config::{global_config, IconConfig};
use crate::node::{IconNode, SvgElement};
use crate::props::IconProps;
use crate::render::mount;

/// A named icon: kebab-case name plus static geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    name: &'static str,
    nodes: &'static [IconNode],
}

impl Icon {
    pub const fn new(name: &'static str, nodes: &'static [IconNode]) -> Self {
        Self { name, nodes }
    }

    /// Kebab-case name, e.g. `alarm-clock`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// PascalCase component name, e.g. `AlarmClock`
    pub fn component_name(&self) -> String {
        to_pascal_case(self.name)
    }

    pub fn nodes(&self) -> &'static [IconNode] {
        self.nodes
    }

    /// Render with the process-wide default config
    pub fn render(&self, props: &IconProps) -> SvgElement {
        self.render_with(props, &global_config())
    }

    /// Render with an explicit default config
    pub fn render_with(&self, props: &IconProps, config: &IconConfig) -> SvgElement {
        mount(self.name, self.nodes, props, config)
    }

    /// Render straight to markup
    pub fn to_svg(&self, props: &IconProps) -> String {
        self.render(props).to_markup()
    }
}

/// Build an icon component from a name and geometry
pub const fn create_icon(name: &'static str, nodes: &'static [IconNode]) -> Icon {
    Icon::new(name, nodes)
}
