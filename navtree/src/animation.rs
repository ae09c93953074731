//! Height hooks for submenu expand/collapse transitions.
//!
//! The rendering layer calls these at the boundaries of a transition. They
//! only read and write the element's extent; nothing is kept between calls.

/// Explicit height of a submenu container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Extent {
    /// Sized by its content.
    #[default]
    Auto,
    /// Fixed number of rows.
    Fixed(u16),
}

/// An element whose height can be measured and set.
pub trait ExpandTarget {
    /// Natural height of the content, ignoring any explicit extent.
    fn scroll_height(&self) -> u16;

    /// Set the explicit extent.
    fn set_height(&mut self, height: Extent);

    /// Hide or show the element without animating.
    fn set_hidden(&mut self, hidden: bool);
}

/// Drives the height hooks for one menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeightAnimator {
    /// The menu is collapsed to icons only.
    pub is_collapsed: bool,
}

impl HeightAnimator {
    pub fn new(is_collapsed: bool) -> Self {
        Self { is_collapsed }
    }

    /// Start of an expand: pin the height to the content so it can grow.
    pub fn expand_enter(&self, el: &mut impl ExpandTarget) {
        let height = el.scroll_height();
        el.set_height(Extent::Fixed(height));
    }

    /// End of an expand: release the height so content can resize.
    pub fn expand_after_enter(&self, el: &mut impl ExpandTarget) {
        el.set_height(Extent::Auto);
    }

    /// Start of a collapse.
    ///
    /// In icon-only mode the element is hidden immediately. Otherwise the
    /// height is pinned first so the collapse animates from a known size.
    pub fn expand_before_leave(&self, el: &mut impl ExpandTarget) {
        if self.is_collapsed {
            el.set_hidden(true);
            return;
        }
        let height = el.scroll_height();
        el.set_height(Extent::Fixed(height));
    }

    /// Run the hook matching a visibility change, if any.
    pub fn transition(&self, el: &mut impl ExpandTarget, was_shown: bool, now_shown: bool) {
        match (was_shown, now_shown) {
            (false, true) => self.expand_enter(el),
            (true, false) => self.expand_before_leave(el),
            _ => {}
        }
    }
}

/// A plain in-memory element box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementBox {
    /// Natural content height in rows.
    pub content_height: u16,
    /// Explicit extent.
    pub height: Extent,
    /// Hidden without animation.
    pub hidden: bool,
}

impl ElementBox {
    pub fn new(content_height: u16) -> Self {
        Self {
            content_height,
            ..Default::default()
        }
    }
}

impl ExpandTarget for ElementBox {
    fn scroll_height(&self) -> u16 {
        self.content_height
    }

    fn set_height(&mut self, height: Extent) {
        self.height = height;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
