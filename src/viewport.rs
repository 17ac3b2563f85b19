use crate::flow::ScrollingFlowBox;
use crate::{Extent, paging};

/// The fixed-size clipped window through which the scrolling content is seen.
///
/// The clip region is sized to exactly fit the current page's visible items: a
/// partially filled final page gets a window spanning only its real contents,
/// not a full page's width. The same value serves as the clip shape *and* the
/// window's local bounds, so centering math elsewhere stays correct for
/// partial pages by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportWindow {
    /// Main-axis position of the window within the overall carousel frame
    /// (after the previous button, when that button is visible).
    pub main_start: u64,
    clip: Extent,
}

impl ViewportWindow {
    pub(crate) fn new(main_start: u64, clip: Extent) -> Self {
        Self { main_start, clip }
    }

    pub fn clip(&self) -> Extent {
        self.clip
    }

    /// Explicit local bounds, identical to the clip region.
    pub fn local_bounds(&self) -> Extent {
        self.clip
    }
}

/// Computes the clip region for the given (already clamped) page.
///
/// - Zero visible items: degenerate zero-sized region.
/// - Otherwise, over the page's slice of visible boxes: the last box is the
///   `items_per_page`-th one when the page is full, else the last available
///   visible box.
/// - Main extent: far edge of the last box minus near edge of the first, plus
///   a margin on both sides. Cross extent: the container's cross bounds.
pub(crate) fn compute_clip<T>(
    flow: &ScrollingFlowBox<T>,
    page: usize,
    items_per_page: usize,
    margin: u32,
) -> Extent {
    let visible_count = flow.visible_count();
    if visible_count == 0 {
        return Extent::ZERO;
    }

    let first_index = paging::first_on_page(page, items_per_page);
    let Some(first) = flow.visible_box(first_index) else {
        // Defensive: a transient out-of-range page before reclamping.
        return Extent::ZERO;
    };
    let last_index = (first_index + items_per_page.max(1) - 1).min(visible_count - 1);
    let Some(last) = flow.visible_box(last_index) else {
        return Extent::ZERO;
    };

    Extent {
        main: last
            .end()
            .saturating_sub(first.start)
            .saturating_add(2 * margin as u64),
        cross: flow.content_extent().cross,
    }
}
