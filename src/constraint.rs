use alloc::vec::Vec;

use crate::flow::ScrollingFlowBox;
use crate::options::CarouselOptions;
use crate::paging;
use crate::types::{Extent, Rect};
use crate::viewport::{self, ViewportWindow};

/// Placement of a next/previous page button.
///
/// `cross_start` can be negative: buttons are centered against the background
/// and their preferred cross size may exceed it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonFrame {
    pub main_start: u64,
    pub cross_start: i64,
    pub size: Rect,
    pub enabled: bool,
    pub visible: bool,
}

/// A non-interactive divider between two adjacent visible items.
///
/// `main` is the line's position in content coordinates (the midpoint of the
/// gap); `cross` is the full cross extent it spans. Separators exist only in
/// the layout output, never in the orderable item set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorLine {
    pub main: u64,
    pub cross: u32,
}

/// The complete output of one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselLayout {
    pub viewport: ViewportWindow,
    pub prev_button: ButtonFrame,
    pub next_button: ButtonFrame,
    /// Overall carousel extent: viewport plus each visible button.
    pub background: Extent,
    pub separators: Vec<SeparatorLine>,
    /// Scroll offset that puts the first visible item of `page` at the margin
    /// edge of the viewport; 0 when the page is empty.
    pub target_offset: u64,
    /// The page the pass laid out (input page clamped against `page_count`).
    pub page: usize,
    pub page_count: usize,
}

/// The single top-level layout pass.
///
/// Re-run whenever items, visibility, child order, or pagination change. The
/// pass is pure and deterministic on its read inputs; a degenerate (empty)
/// item set yields zero-sized outputs rather than an error.
pub struct CarouselConstraint;

impl CarouselConstraint {
    pub fn layout<T, K>(
        flow: &ScrollingFlowBox<T>,
        page: usize,
        options: &CarouselOptions<K>,
    ) -> CarouselLayout {
        let ipp = options.items_per_page.max(1);
        let visible_count = flow.visible_count();
        let page_count = paging::count_pages(visible_count, ipp);
        let page = paging::clamp_page(page, page_count);

        let clip = viewport::compute_clip(flow, page, ipp, options.margin);

        // Button preferred cross size tracks the shared footprint, so item
        // visibility changes don't resize the buttons.
        let button_size = Rect {
            main: options.button_main_size,
            cross: flow
                .group()
                .max_size()
                .cross
                .saturating_add(options.margin.saturating_mul(2)),
        };

        let prev_enabled = page > 0;
        let next_enabled = page + 1 < page_count;
        let prev_visible = !(options.hide_disabled_buttons && !prev_enabled);
        let next_visible = !(options.hide_disabled_buttons && !next_enabled);
        let prev_main = if prev_visible { button_size.main as u64 } else { 0 };
        let next_main = if next_visible { button_size.main as u64 } else { 0 };

        let background = Extent {
            main: clip.main.saturating_add(prev_main).saturating_add(next_main),
            cross: clip.cross,
        };
        let button_cross_start = (background.cross as i64 - button_size.cross as i64) / 2;

        let prev_button = ButtonFrame {
            main_start: 0,
            cross_start: button_cross_start,
            size: button_size,
            enabled: prev_enabled,
            visible: prev_visible,
        };
        let next_button = ButtonFrame {
            main_start: prev_main.saturating_add(clip.main),
            cross_start: button_cross_start,
            size: button_size,
            enabled: next_enabled,
            visible: next_visible,
        };

        let separators = if options.separators {
            Self::compute_separators(flow)
        } else {
            Vec::new()
        };

        let target_offset = if visible_count == 0 {
            0
        } else {
            flow.visible_box(paging::first_on_page(page, ipp))
                .map_or(0, |b| b.start.saturating_sub(options.margin as u64))
        };

        CarouselLayout {
            viewport: ViewportWindow::new(prev_main, clip),
            prev_button,
            next_button,
            background,
            separators,
            target_offset,
            page,
            page_count,
        }
    }

    /// One separator per adjacent pair of visible boxes, at the midpoint of
    /// the gap between them, spanning the full cross extent.
    fn compute_separators<T>(flow: &ScrollingFlowBox<T>) -> Vec<SeparatorLine> {
        let cross = flow.content_extent().cross;
        let mut out = Vec::new();
        let mut prev_end: Option<u64> = None;
        flow.for_each_visible(|b| {
            if let Some(end) = prev_end {
                out.push(SeparatorLine {
                    main: end.midpoint(b.start),
                    cross,
                });
            }
            prev_end = Some(b.end());
        });
        out
    }
}
