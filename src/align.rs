use core::fmt;

use crate::Rect;

/// Shared footprint sizing across a set of alignment boxes.
///
/// Every box in the group reports the same footprint (the component-wise
/// maximum of all members' intrinsic sizes), so heterogeneous content items
/// occupy uniform slots. A per-box override opts a box out of the shared size.
///
/// Boxes are never added or removed after construction, so the maximum is
/// computed once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignGroup {
    max: Rect,
}

impl AlignGroup {
    pub fn from_boxes<T>(boxes: &[AlignBox<T>]) -> Self {
        let mut max = Rect::default();
        for b in boxes {
            max = max.max(b.size());
        }
        Self { max }
    }

    /// The shared maximum footprint across all boxes, visible or not.
    pub fn max_size(&self) -> Rect {
        self.max
    }
}

/// Wraps exactly one content value in a uniformly sized slot.
///
/// The binding to the content value is established at construction and never
/// rebound. The `visible` flag is the unit the pagination logic filters on.
pub struct AlignBox<T> {
    content: T,
    size: Rect,
    footprint_override: Option<Rect>,
    visible: bool,
}

impl<T> AlignBox<T> {
    pub fn new(content: T, size: Rect) -> Self {
        Self {
            content,
            size,
            footprint_override: None,
            visible: true,
        }
    }

    pub fn with_footprint_override(mut self, footprint: Option<Rect>) -> Self {
        self.footprint_override = footprint;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    pub fn into_content(self) -> T {
        self.content
    }

    /// The intrinsic content size (contributes to the group maximum).
    pub fn size(&self) -> Rect {
        self.size
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` when the flag changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }

    /// The slot this box occupies in the layout: the per-box override if set,
    /// else the group's shared maximum.
    pub fn footprint(&self, group: &AlignGroup) -> Rect {
        self.footprint_override.unwrap_or(group.max_size())
    }
}

impl<T> fmt::Debug for AlignBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignBox")
            .field("size", &self.size)
            .field("footprint_override", &self.footprint_override)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
