//! Lucide icon set for Lucent
//!
//! Every icon in `icons/` is compiled into a `pub const` [`Icon`] named after
//! the file in SCREAMING_SNAKE_CASE (`alarm-clock.svg` -> [`ALARM_CLOCK`]).
//! Unused icons are removed by dead code elimination.
//!
//! ```rust
//! use lucent_core::IconProps;
//!
//! let svg = lucent_icons::ALARM_CLOCK.to_svg(&IconProps::new().size(32.0));
//! assert!(svg.contains(r#"class="lucide lucide-alarm-clock""#));
//!
//! let icon = lucent_icons::find("AlarmClockIcon").unwrap();
//! assert_eq!(icon.name(), "alarm-clock");
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use lucent_core::{to_pascal_case, Icon, IconError};

mod icons {
    use lucent_core::{Icon, IconNode};

    include!(concat!(env!("OUT_DIR"), "/icons.rs"));
}

pub use icons::*;

/// Prefix accepted by [`find`] on component-style names (`LucideHeart`)
const COMPONENT_PREFIX: &str = "Lucide";
/// Suffix accepted by [`find`] on component-style names (`HeartIcon`)
const COMPONENT_SUFFIX: &str = "Icon";

fn index() -> &'static HashMap<String, &'static Icon> {
    static INDEX: OnceLock<HashMap<String, &'static Icon>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(ALL.len() * 2);
        for icon in ALL {
            map.insert(icon.name().to_string(), *icon);
            map.insert(to_pascal_case(icon.name()), *icon);
        }
        map
    })
}

/// Look up an icon by name
///
/// Accepts the kebab-case file name (`alarm-clock`), the component name
/// (`AlarmClock`), and the `AlarmClockIcon` / `LucideAlarmClock` forms.
pub fn find(name: &str) -> Option<&'static Icon> {
    let index = index();
    if let Some(icon) = index.get(name) {
        return Some(*icon);
    }

    let stripped = name
        .strip_suffix(COMPONENT_SUFFIX)
        .or_else(|| name.strip_prefix(COMPONENT_PREFIX))?;
    let found = index.get(stripped).copied();
    if found.is_none() {
        tracing::debug!(name, "no icon matches");
    }
    found
}

/// Like [`find`], but reports unknown names as an error
pub fn get(name: &str) -> Result<&'static Icon, IconError> {
    find(name).ok_or_else(|| IconError::UnknownIcon(name.to_string()))
}

/// Icons whose name contains `needle` (case-insensitive), in name order
pub fn search(needle: &str) -> impl Iterator<Item = &'static Icon> {
    let needle = needle.to_ascii_lowercase();
    ALL.iter()
        .copied()
        .filter(move |icon| icon.name().contains(needle.as_str()))
}

/// Number of icons in the set
pub fn count() -> usize {
    ALL.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_core::{IconConfig, IconProps, Tag};

    #[test]
    fn test_all_sorted_and_unique() {
        assert!(count() > 100);
        for pair in ALL.windows(2) {
            assert!(pair[0].name() < pair[1].name());
        }
    }

    #[test]
    fn test_every_icon_has_geometry() {
        for icon in ALL {
            assert!(!icon.nodes().is_empty(), "{} has no nodes", icon.name());
            for node in icon.nodes() {
                assert!(
                    Tag::parse(node.tag).is_shape(),
                    "{} contains non-shape <{}>",
                    icon.name(),
                    node.tag
                );
            }
        }
    }

    #[test]
    fn test_generated_geometry_matches_source() {
        let nodes = ALARM_CLOCK.nodes();
        assert_eq!(nodes.len(), 6);
        assert_eq!(nodes[0].tag, "circle");
        assert_eq!(nodes[0].attrs, &[("cx", "12"), ("cy", "13"), ("r", "8")]);
        assert_eq!(nodes[1].attr("d"), Some("M12 9v4l2 2"));
    }

    #[test]
    fn test_find_name_forms() {
        for name in ["alarm-clock", "AlarmClock", "AlarmClockIcon", "LucideAlarmClock"] {
            assert_eq!(find(name), Some(&ALARM_CLOCK), "lookup of {}", name);
        }
        assert_eq!(find("x"), Some(&X));
        assert_eq!(find("X"), Some(&X));
        assert!(find("not-an-icon").is_none());
        assert!(find("Icon").is_none());
    }

    #[test]
    fn test_get_unknown() {
        assert_eq!(
            get("nope"),
            Err(IconError::UnknownIcon("nope".to_string()))
        );
    }

    #[test]
    fn test_search() {
        let names: Vec<_> = search("Chevron").map(Icon::name).collect();
        assert_eq!(
            names,
            vec!["chevron-down", "chevron-left", "chevron-right", "chevron-up"]
        );
    }

    #[test]
    fn test_render_generated_icon() {
        let root = HEART.render_with(&IconProps::new().color("red"), &IconConfig::default());
        assert_eq!(root.get_attr("class"), Some("lucide lucide-heart"));
        for path in root.find_all(&Tag::Path) {
            assert_eq!(path.get_attr("stroke"), Some("red"));
            assert_eq!(path.get_attr("fill"), Some("none"));
        }
    }
}
