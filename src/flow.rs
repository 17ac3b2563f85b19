use alloc::vec::Vec;
use core::fmt;

use crate::align::{AlignBox, AlignGroup};
use crate::{Extent, Rect};

/// A visible box as placed by the flow layout.
///
/// `item` is the original (construction-order) item index; `index` is the
/// position within the visible subsequence in current child order. `start` is
/// the box's near edge in content coordinates (the first visible box starts at
/// `margin`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleBox {
    pub item: usize,
    pub index: usize,
    pub start: u64,
    pub footprint: Rect,
}

impl VisibleBox {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.footprint.main as u64)
    }
}

/// An ordered, linearly arranged container of alignment boxes.
///
/// Boxes are stored in construction order; a separate child-order table
/// supports external reordering without touching the boxes themselves. Visible
/// boxes are laid end-to-end on the main axis with `spacing` between adjacent
/// boxes and `margin` before the first one.
///
/// The visible subsequence is always derived on demand by a single walk
/// ([`Self::for_each_visible`]); the visibility path and the reorder path both
/// read through it, so the two can never diverge.
pub struct ScrollingFlowBox<T> {
    boxes: Vec<AlignBox<T>>,
    order: Vec<usize>,
    group: AlignGroup,
    spacing: u32,
    margin: u32,
}

impl<T> ScrollingFlowBox<T> {
    pub fn new(boxes: Vec<AlignBox<T>>, spacing: u32, margin: u32) -> Self {
        let group = AlignGroup::from_boxes(&boxes);
        let order = (0..boxes.len()).collect();
        Self {
            boxes,
            order,
            group,
            spacing,
            margin,
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn group(&self) -> &AlignGroup {
        &self.group
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn box_at(&self, item_index: usize) -> Option<&AlignBox<T>> {
        self.boxes.get(item_index)
    }

    pub fn box_at_mut(&mut self, item_index: usize) -> Option<&mut AlignBox<T>> {
        self.boxes.get_mut(item_index)
    }

    /// Current child position of an item, or `None` if the index is invalid.
    pub fn child_index_of(&self, item_index: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == item_index)
    }

    /// Consumes the container, returning contents in original item order.
    pub fn into_contents(self) -> Vec<T> {
        self.boxes.into_iter().map(AlignBox::into_content).collect()
    }

    /// Toggles an item's visibility. Returns `true` when the flag changed.
    ///
    /// An out-of-range index is a caller error (debug assertion); release
    /// builds ignore it.
    pub fn set_visible(&mut self, item_index: usize, visible: bool) -> bool {
        if item_index >= self.boxes.len() {
            cwarn!(item_index, count = self.boxes.len(), "set_visible: out-of-range item");
            debug_assert!(
                item_index < self.boxes.len(),
                "set_visible: out-of-range item index (i={item_index}, count={})",
                self.boxes.len()
            );
            return false;
        }
        self.boxes[item_index].set_visible(visible)
    }

    /// Moves an item to a new child position.
    ///
    /// Returns the applied child index, or `None` if the item index is invalid.
    /// An out-of-range target index is a caller error (debug assertion);
    /// release builds clamp it.
    pub fn move_child_to_index(&mut self, item_index: usize, new_index: usize) -> Option<usize> {
        let Some(pos) = self.child_index_of(item_index) else {
            cwarn!(item_index, "move_child_to_index: unknown item");
            debug_assert!(
                item_index < self.boxes.len(),
                "move_child_to_index: out-of-range item index (i={item_index}, count={})",
                self.boxes.len()
            );
            return None;
        };
        debug_assert!(
            new_index < self.order.len(),
            "move_child_to_index: out-of-range target index (new={new_index}, count={})",
            self.order.len()
        );
        let new_index = new_index.min(self.order.len().saturating_sub(1));

        self.order.remove(pos);
        self.order.insert(new_index, item_index);
        ctrace!(item_index, from = pos, to = new_index, "move_child_to_index");
        Some(new_index)
    }

    /// Walks the visible boxes in current child order, with layout positions.
    pub fn for_each_visible(&self, mut f: impl FnMut(VisibleBox)) {
        let mut start = self.margin as u64;
        let mut index = 0usize;
        for &item in &self.order {
            let b = &self.boxes[item];
            if !b.visible() {
                continue;
            }
            let footprint = b.footprint(&self.group);
            f(VisibleBox {
                item,
                index,
                start,
                footprint,
            });
            start = start
                .saturating_add(footprint.main as u64)
                .saturating_add(self.spacing as u64);
            index += 1;
        }
    }

    /// Collects the visible boxes into `out` (clears `out` first).
    pub fn collect_visible(&self, out: &mut Vec<VisibleBox>) {
        out.clear();
        self.for_each_visible(|b| out.push(b));
    }

    pub fn visible_count(&self) -> usize {
        let mut n = 0usize;
        self.for_each_visible(|_| n += 1);
        n
    }

    /// Position of an item within the visible subsequence, if it is visible.
    pub fn visible_index_of(&self, item_index: usize) -> Option<usize> {
        let mut found = None;
        self.for_each_visible(|b| {
            if b.item == item_index {
                found = Some(b.index);
            }
        });
        found
    }

    /// The visible box at a given visible index.
    pub fn visible_box(&self, visible_index: usize) -> Option<VisibleBox> {
        let mut found = None;
        self.for_each_visible(|b| {
            if b.index == visible_index {
                found = Some(b);
            }
        });
        found
    }

    /// The bounds of the laid-out visible content.
    ///
    /// Main extent includes the leading and trailing margin; cross extent is
    /// the largest visible footprint. Zero visible items yield a zero extent.
    pub fn content_extent(&self) -> Extent {
        let mut last_end = None;
        let mut cross = 0u32;
        self.for_each_visible(|b| {
            last_end = Some(b.end());
            cross = cross.max(b.footprint.cross);
        });
        match last_end {
            Some(end) => Extent {
                main: end.saturating_add(self.margin as u64),
                cross,
            },
            None => Extent::ZERO,
        }
    }
}

impl<T> fmt::Debug for ScrollingFlowBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollingFlowBox")
            .field("len", &self.boxes.len())
            .field("order", &self.order)
            .field("spacing", &self.spacing)
            .field("margin", &self.margin)
            .finish_non_exhaustive()
    }
}
