use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use crate::align::AlignBox;
use crate::animator::{ScrollAnimator, SnapReasons};
use crate::constraint::{CarouselConstraint, CarouselLayout};
use crate::flow::ScrollingFlowBox;
use crate::options::CarouselOptions;
use crate::paging;
use crate::state::{CarouselFrame, PageState, ScrollState};
use crate::types::{ItemKey, Rect};

/// A content descriptor supplied by the host when constructing a carousel.
///
/// The carousel takes ownership of `content` and holds it for its lifetime
/// (wrap it in exactly one alignment box, never rebound). `size` is the
/// intrinsic footprint contributing to the shared alignment group maximum.
pub struct CarouselItem<T> {
    pub content: T,
    pub size: Rect,
    /// Opts this item out of the shared footprint size.
    pub footprint_override: Option<Rect>,
    pub visible: bool,
}

impl<T> CarouselItem<T> {
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
}

/// A paged carousel: layout, pagination, and scroll animation over a set of
/// uniformly sized items.
///
/// The carousel is headless. It owns the item contents, the scrolling flow
/// box, the current page number, and the scroll animator; each mutation runs
/// one relayout pass (visible re-derivation → page clamp → animator retarget →
/// constraint layout → notify) and the host reads the results via
/// [`Self::layout`] and [`Self::scroll_offset`].
///
/// Drive animation by calling [`Self::step`] from the shared stepping clock.
pub struct Carousel<T, K = ItemKey> {
    options: CarouselOptions<K>,
    flow: ScrollingFlowBox<T>,
    animator: ScrollAnimator,
    /// Stored page number; may transiently exceed the current page count
    /// (range is checked against the *total* item set). Animation-facing
    /// reads always go through the clamped value in `layout`.
    page: usize,
    layout: CarouselLayout,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T, K> Carousel<T, K> {
    /// Creates a carousel from items and options, and runs the first layout
    /// pass (which always applies the default page's offset without
    /// animating).
    ///
    /// Configuration errors (`items_per_page == 0`, `spacing < margin`,
    /// `default_page` out of range) are debug assertions; release builds
    /// clamp and continue.
    pub fn new(items: Vec<CarouselItem<T>>, options: CarouselOptions<K>) -> Self {
        debug_assert!(
            options.items_per_page >= 1,
            "items_per_page must be >= 1 (got {})",
            options.items_per_page
        );
        debug_assert!(
            options.spacing >= options.margin,
            "spacing ({}) must be >= margin ({})",
            options.spacing,
            options.margin
        );
        let max_pages = paging::max_possible_pages(items.len(), options.items_per_page);
        debug_assert!(
            options.default_page < max_pages,
            "default_page ({}) out of range (max possible pages: {max_pages})",
            options.default_page
        );

        cdebug!(
            items = items.len(),
            items_per_page = options.items_per_page,
            default_page = options.default_page,
            "Carousel::new"
        );

        let boxes = items
            .into_iter()
            .map(|item| {
                AlignBox::new(item.content, item.size)
                    .with_footprint_override(item.footprint_override)
                    .with_visible(item.visible)
            })
            .collect();
        let flow = ScrollingFlowBox::new(boxes, options.spacing, options.margin);
        let animator = ScrollAnimator::new(options.animation_duration_ms, options.easing);
        let page = paging::clamp_page(options.default_page, max_pages);

        let mut c = Self {
            options,
            flow,
            animator,
            page,
            layout: CarouselLayout::default(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.relayout(0, false);
        c
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    /// The current page number, clamped against the derived page count.
    pub fn page_number(&self) -> usize {
        self.layout.page
    }

    /// Derived page count; always >= 1.
    pub fn page_count(&self) -> usize {
        self.layout.page_count
    }

    /// Upper bound on page numbers, against the total (not just currently
    /// visible) item count.
    pub fn max_possible_pages(&self) -> usize {
        paging::max_possible_pages(self.flow.len(), self.options.items_per_page)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Current scroll offset of the content container.
    pub fn scroll_offset(&self) -> u64 {
        self.animator.offset()
    }

    /// The most recent layout pass output.
    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    /// Snapshot of the current pagination + scroll state.
    pub fn frame_state(&self) -> CarouselFrame {
        CarouselFrame {
            page: PageState {
                page: self.layout.page,
                page_count: self.layout.page_count,
            },
            scroll: ScrollState {
                offset: self.animator.offset(),
                is_animating: self.animator.is_animating(),
            },
        }
    }

    pub fn visible_count(&self) -> usize {
        self.flow.visible_count()
    }

    pub fn is_item_visible(&self, item_index: usize) -> bool {
        self.flow
            .box_at(item_index)
            .is_some_and(|b| b.visible())
    }

    pub fn content(&self, item_index: usize) -> Option<&T> {
        self.flow.box_at(item_index).map(|b| b.content())
    }

    pub fn content_mut(&mut self, item_index: usize) -> Option<&mut T> {
        self.flow.box_at_mut(item_index).map(|b| b.content_mut())
    }

    /// Stable identity of the item at an original item index.
    pub fn key_for(&self, item_index: usize) -> K {
        (self.options.get_item_key)(item_index)
    }

    /// The scrolling container, for read-only geometry queries.
    pub fn flow(&self) -> &ScrollingFlowBox<T> {
        &self.flow
    }

    /// Releases the content values in original item order.
    pub fn into_contents(self) -> Vec<T> {
        self.flow.into_contents()
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self.frame_state());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// The single recomputation chain behind every mutation.
    fn relayout(&mut self, now_ms: u64, force_snap: bool) {
        let layout = CarouselConstraint::layout(&self.flow, self.page, &self.options);
        let restoring = self
            .options
            .is_state_restoring
            .as_ref()
            .is_some_and(|signal| signal());

        self.animator.retarget(
            layout.target_offset,
            self.flow.content_extent().main,
            now_ms,
            SnapReasons {
                animation_disabled: !self.options.animation_enabled,
                state_restoring: restoring,
                forced: force_snap,
            },
        );
        self.layout = layout;
        self.notify();
    }

    fn set_page(&mut self, page: usize, now_ms: u64, force_snap: bool) {
        let max_pages = self.max_possible_pages();
        debug_assert!(
            page < max_pages,
            "page ({page}) out of range (max possible pages: {max_pages})"
        );
        let page = paging::clamp_page(page, max_pages);
        if self.page == page && !force_snap && !self.animator.is_animating() {
            return;
        }
        ctrace!(from = self.page, to = page, "set_page");
        self.page = page;
        self.relayout(now_ms, force_snap);
    }

    /// Scrolls to a page (button-press semantics use this).
    pub fn scroll_to_page(&mut self, page: usize, now_ms: u64) {
        self.set_page(page, now_ms, false);
    }

    /// Next-button press. Clamps at the last page.
    pub fn next_page(&mut self, now_ms: u64) {
        let next = paging::clamp_page(self.layout.page + 1, self.layout.page_count);
        self.set_page(next, now_ms, false);
    }

    /// Previous-button press. Clamps at the first page.
    pub fn previous_page(&mut self, now_ms: u64) {
        self.set_page(self.layout.page.saturating_sub(1), now_ms, false);
    }

    /// Scrolls so the page containing the given item is shown.
    ///
    /// The item must be present and currently visible; anything else is a
    /// caller error (debug assertion), ignored in release builds.
    pub fn scroll_to_item_by_index(&mut self, item_index: usize, now_ms: u64) {
        let Some(visible_index) = self.flow.visible_index_of(item_index) else {
            cwarn!(item_index, "scroll_to_item_by_index: item not present/visible");
            debug_assert!(
                false,
                "scroll_to_item_by_index: item {item_index} is not present/visible"
            );
            return;
        };
        let page = paging::page_of(visible_index, self.options.items_per_page);
        self.set_page(page, now_ms, false);
    }

    /// Scrolls to the item with the given key.
    pub fn scroll_to_key(&mut self, key: &K, now_ms: u64)
    where
        K: PartialEq,
    {
        let Some(item_index) = (0..self.flow.len()).find(|&i| self.key_for(i) == *key) else {
            cwarn!("scroll_to_key: no item with the given key");
            debug_assert!(false, "scroll_to_key: no item with the given key");
            return;
        };
        self.scroll_to_item_by_index(item_index, now_ms);
    }

    /// Toggles an item's visibility and re-runs the recomputation chain:
    /// visible boxes are re-derived, the current page is clamped down if it no
    /// longer exists, and the scroll offset is recomputed (content-resize
    /// suppression means this never tweens).
    pub fn set_item_visible(&mut self, item_index: usize, visible: bool, now_ms: u64) {
        if !self.flow.set_visible(item_index, visible) {
            return;
        }
        let page_count =
            paging::count_pages(self.flow.visible_count(), self.options.items_per_page);
        self.page = paging::clamp_page(self.page, page_count);
        self.relayout(now_ms, false);
    }

    /// Moves an item to a new child index.
    ///
    /// On completion the reorder notification fires and the carousel scrolls
    /// to the moved item's new page; the UI is expected to follow a
    /// user-driven reorder.
    pub fn move_item_to_index(&mut self, item_index: usize, new_index: usize, now_ms: u64) {
        let Some(applied) = self.flow.move_child_to_index(item_index, new_index) else {
            return;
        };
        if let Some(cb) = &self.options.on_reorder {
            cb((self.options.get_item_key)(item_index), applied);
        }

        // Re-derive visible boxes before any paging logic reads them: the new
        // order decides which items fall on which page.
        match self.flow.visible_index_of(item_index) {
            Some(visible_index) => {
                self.page = paging::page_of(visible_index, self.options.items_per_page);
                self.relayout(now_ms, false);
            }
            // Hidden item moved: pagination is unaffected, but neighbors'
            // child indexes changed, so the layout output is refreshed.
            None => self.relayout(now_ms, false),
        }
    }

    /// Returns to the configured default page.
    ///
    /// With `animate = false` the offset is applied immediately even when
    /// animation is globally enabled. Idempotent: a second reset leaves the
    /// page and offset unchanged.
    pub fn reset(&mut self, animate: bool, now_ms: u64) {
        let page = paging::clamp_page(self.options.default_page, self.layout.page_count);
        self.page = page;
        self.relayout(now_ms, !animate);
    }

    /// Advances the scroll animation by the shared stepping clock.
    ///
    /// Returns `Some(offset)` while a tween is active (the completion tick
    /// included); `None` when idle. Zero, one, or many steps between page
    /// changes are all correct.
    pub fn step(&mut self, now_ms: u64) -> Option<u64> {
        let off = self.animator.step(now_ms)?;
        self.notify();
        Some(off)
    }
}

impl<T, K> fmt::Debug for Carousel<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.flow.len())
            .field("page", &self.layout.page)
            .field("page_count", &self.layout.page_count)
            .field("offset", &self.animator.offset())
            .field("is_animating", &self.animator.is_animating())
            .finish_non_exhaustive()
    }
}
