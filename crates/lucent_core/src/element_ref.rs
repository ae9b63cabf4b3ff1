//! ElementRef - forwarded reference to a mounted icon's root node

use std::sync::{Arc, Mutex, MutexGuard};

use crate::node::SvgElement;

/// Inner state shared between clones
#[derive(Debug, Default)]
struct ElementRefInner {
    /// The mounted root (set by the renderer)
    element: Option<SvgElement>,
    /// How many times the reference has been bound
    generation: u64,
}

/// Reference to the root `<svg>` node of a mounted icon
///
/// Pass a clone in [`IconProps::node_ref`](crate::IconProps::node_ref); the
/// renderer binds it when the icon is mounted. All clones observe the same
/// binding.
///
/// # Example
///
/// ```rust
/// use lucent_core::{create_icon, ElementRef, IconNode, IconProps};
///
/// const DOT: &[IconNode] = &[IconNode::leaf("circle", &[("r", "1")])];
///
/// let icon = create_icon("dot", DOT);
/// let root = ElementRef::new();
/// icon.render(&IconProps::new().node_ref(root.clone()));
///
/// let svg = root.get().unwrap();
/// assert_eq!(svg.get_attr("width"), Some("24"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ElementRef {
    inner: Arc<Mutex<ElementRefInner>>,
}

impl ElementRef {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ElementRefInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Bind the reference to a mounted root
    pub(crate) fn bind(&self, element: &SvgElement) {
        let mut inner = self.lock();
        inner.element = Some(element.clone());
        inner.generation += 1;
    }

    /// Whether an icon has been mounted through this reference
    pub fn is_bound(&self) -> bool {
        self.lock().element.is_some()
    }

    /// Snapshot of the bound root
    pub fn get(&self) -> Option<SvgElement> {
        self.lock().element.clone()
    }

    /// Run `f` against the bound root without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&SvgElement) -> R) -> Option<R> {
        self.lock().element.as_ref().map(f)
    }

    /// Number of times this reference has been bound
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Drop the binding
    pub fn clear(&self) {
        self.lock().element = None;
    }

    /// Whether two handles share the same binding
    pub fn ptr_eq(&self, other: &ElementRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Tag;

    #[test]
    fn test_clones_share_binding() {
        let a = ElementRef::new();
        let b = a.clone();
        assert!(!b.is_bound());

        a.bind(&SvgElement::new(Tag::Svg).attr("width", "16"));
        assert!(b.is_bound());
        assert_eq!(b.generation(), 1);
        assert!(a.ptr_eq(&b));

        let width = b.with(|el| el.get_attr("width").map(str::to_string)).flatten();
        assert_eq!(width.as_deref(), Some("16"));

        b.clear();
        assert!(!a.is_bound());
        assert!(a.get().is_none());
    }
}
