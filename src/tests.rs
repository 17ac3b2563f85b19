use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn rect(main: u32, cross: u32) -> Rect {
    Rect::new(main, cross)
}

/// 10 colored-rectangle stand-ins: uniform 40x30 footprints, content = index.
fn gallery(n: usize) -> Vec<CarouselItem<usize>> {
    (0..n).map(|i| CarouselItem::new(i, rect(40, 30))).collect()
}

fn opts() -> CarouselOptions {
    CarouselOptions::new()
        .with_items_per_page(4)
        .with_spacing(12)
        .with_margin(6)
}

fn snap_opts() -> CarouselOptions {
    opts().with_animation_enabled(false)
}

// With footprint 40 and spacing 12, visible item i starts at 6 + 52*i, and a
// full page spans 4*40 + 3*12 + 2*6 = 208.
fn page_offset(page: usize) -> u64 {
    208 * page as u64
}

fn naive_count_pages(visible_count: usize, items_per_page: usize) -> usize {
    let mut pages = 0;
    let mut remaining = visible_count;
    while remaining > 0 {
        remaining = remaining.saturating_sub(items_per_page);
        pages += 1;
    }
    pages.max(1)
}

// ---------------------------------------------------------------------------
// PagingModel

#[test]
fn count_pages_matches_ceil_with_blank_page_floor() {
    assert_eq!(count_pages(10, 4), 3);
    assert_eq!(count_pages(0, 4), 1);
    assert_eq!(count_pages(4, 4), 1);
    assert_eq!(count_pages(5, 4), 2);
    assert_eq!(count_pages(1, 1), 1);
    assert_eq!(count_pages(7, 1), 7);
    assert_eq!(count_pages(0, 1), 1);
}

#[test]
fn count_pages_randomized_matches_naive() {
    let mut rng = Lcg::new(0xDECADE);
    for _ in 0..500 {
        let n = rng.gen_range_usize(0, 200);
        let ipp = rng.gen_range_usize(1, 12);
        assert_eq!(count_pages(n, ipp), naive_count_pages(n, ipp), "n={n} ipp={ipp}");
    }
}

#[test]
fn clamp_page_never_references_a_nonexistent_page() {
    assert_eq!(clamp_page(5, 3), 2);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(0, 1), 0);
}

#[test]
fn page_of_and_first_on_page_are_inverse_on_page_starts() {
    for page in 0..10 {
        assert_eq!(page_of(first_on_page(page, 4), 4), page);
    }
    assert_eq!(page_of(6, 4), 1);
    assert_eq!(page_of(7, 4), 1);
    assert_eq!(page_of(8, 4), 2);
}

#[test]
fn max_possible_pages_counts_hidden_items() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    for i in 4..10 {
        c.set_item_visible(i, false, 0);
    }
    assert_eq!(c.page_count(), 1);
    assert_eq!(c.max_possible_pages(), 3);
}

// ---------------------------------------------------------------------------
// Flow layout

#[test]
fn visible_boxes_are_laid_end_to_end_with_margin_and_spacing() {
    let c = Carousel::new(gallery(10), snap_opts());
    let mut boxes = Vec::new();
    c.flow().collect_visible(&mut boxes);
    assert_eq!(boxes.len(), 10);
    for (i, b) in boxes.iter().enumerate() {
        assert_eq!(b.index, i);
        assert_eq!(b.item, i);
        assert_eq!(b.start, 6 + 52 * i as u64);
        assert_eq!(b.footprint, rect(40, 30));
    }
    assert_eq!(
        c.flow().content_extent(),
        Extent {
            // 6 + 9*52 + 40 + 6
            main: 520,
            cross: 30,
        }
    );
}

#[test]
fn hidden_boxes_do_not_occupy_layout_space() {
    let mut c = Carousel::new(gallery(4), snap_opts());
    c.set_item_visible(1, false, 0);
    let mut boxes = Vec::new();
    c.flow().collect_visible(&mut boxes);
    assert_eq!(boxes.len(), 3);
    assert_eq!(boxes[0].item, 0);
    assert_eq!(boxes[1].item, 2);
    assert_eq!(boxes[1].start, 6 + 52);
    assert_eq!(boxes[2].item, 3);
    assert_eq!(c.flow().visible_index_of(2), Some(1));
    assert_eq!(c.flow().visible_index_of(1), None);
}

#[test]
fn footprint_override_opts_a_box_out_of_the_shared_size() {
    let mut items = gallery(3);
    items[1] = CarouselItem::new(1, rect(10, 10)).with_footprint_override(Some(rect(10, 10)));
    let c = Carousel::new(items, snap_opts());

    // The group maximum still comes from the larger boxes.
    assert_eq!(c.flow().group().max_size(), rect(40, 30));

    let mut boxes = Vec::new();
    c.flow().collect_visible(&mut boxes);
    assert_eq!(boxes[0].footprint, rect(40, 30));
    assert_eq!(boxes[1].footprint, rect(10, 10));
    // Item 2 starts after the overridden (narrow) slot.
    assert_eq!(boxes[2].start, 6 + 52 + 10 + 12);
}

#[test]
fn randomized_flow_layout_matches_naive_walk() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..100 {
        let n = rng.gen_range_usize(0, 12);
        let spacing = rng.gen_range_u32(0, 20);
        let margin = rng.gen_range_u32(0, spacing + 1);

        let mut sizes = Vec::new();
        let mut visible = Vec::new();
        let mut boxes = Vec::new();
        for i in 0..n {
            let size = rect(rng.gen_range_u32(1, 60), rng.gen_range_u32(1, 40));
            let vis = rng.gen_bool();
            sizes.push(size);
            visible.push(vis);
            boxes.push(AlignBox::new(i, size).with_visible(vis));
        }
        let group_max = sizes.iter().copied().fold(Rect::default(), Rect::max);
        let flow = ScrollingFlowBox::new(boxes, spacing, margin);

        let mut expected_start = margin as u64;
        let mut expected_index = 0usize;
        let mut last_end = None;
        let mut cross = 0u32;
        let mut got = Vec::new();
        flow.collect_visible(&mut got);
        for (item, &vis) in visible.iter().enumerate() {
            if !vis {
                continue;
            }
            let b = got[expected_index];
            assert_eq!(b.item, item);
            assert_eq!(b.index, expected_index);
            assert_eq!(b.start, expected_start);
            assert_eq!(b.footprint, group_max);
            last_end = Some(b.end());
            cross = cross.max(group_max.cross);
            expected_start += group_max.main as u64 + spacing as u64;
            expected_index += 1;
        }
        assert_eq!(got.len(), expected_index);
        assert_eq!(flow.visible_count(), expected_index);

        let expected_extent = match last_end {
            Some(end) => Extent {
                main: end + margin as u64,
                cross,
            },
            None => Extent::ZERO,
        };
        assert_eq!(flow.content_extent(), expected_extent);
    }
}

// ---------------------------------------------------------------------------
// Viewport clip sizing

#[test]
fn full_page_clip_spans_items_per_page_footprints() {
    let c = Carousel::new(gallery(10), snap_opts());
    let clip = c.layout().viewport.clip();
    // 4*40 + 3*12 + 2*6
    assert_eq!(clip, Extent { main: 208, cross: 30 });
    assert_eq!(c.layout().viewport.local_bounds(), clip);
}

#[test]
fn partial_last_page_clip_spans_only_its_real_contents() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_page(2, 0);
    // Items 8-9 only: 2*40 + 12 + 2*6, not a full 4-item window.
    assert_eq!(c.layout().viewport.clip(), Extent { main: 104, cross: 30 });
    assert_eq!(c.scroll_offset(), page_offset(2));
}

#[test]
fn zero_visible_items_yield_a_degenerate_clip() {
    let mut c = Carousel::new(gallery(3), snap_opts());
    c.batch_update(|c| {
        for i in 0..3 {
            c.set_item_visible(i, false, 0);
        }
    });
    assert_eq!(c.page_count(), 1);
    assert_eq!(c.page_number(), 0);
    assert!(c.layout().viewport.clip().is_empty());
    assert_eq!(c.layout().target_offset, 0);
    assert_eq!(c.scroll_offset(), 0);
}

#[test]
fn empty_carousel_is_one_blank_page() {
    let c: Carousel<usize> = Carousel::new(Vec::new(), snap_opts());
    assert_eq!(c.page_count(), 1);
    assert_eq!(c.max_possible_pages(), 1);
    assert!(c.layout().viewport.clip().is_empty());
    assert_eq!(c.scroll_offset(), 0);
}

// ---------------------------------------------------------------------------
// Tween / ScrollAnimator

#[test]
fn tween_sampling_hits_endpoints_and_midpoint() {
    let t = Tween::new(0, 100, 0, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0);
    assert_eq!(t.sample(50), 50);
    assert_eq!(t.sample(100), 100);
    assert!(t.is_done(100));
    assert!(!t.is_done(99));

    // Both symmetric easings pass through the midpoint.
    let t = Tween::new(0, 100, 0, 100, Easing::SmoothStep);
    assert_eq!(t.sample(50), 50);
    let t = Tween::new(0, 100, 0, 100, Easing::EaseInOutCubic);
    assert_eq!(t.sample(50), 50);
}

#[test]
fn tween_retarget_continues_from_the_sampled_position() {
    let mut t = Tween::new(0, 100, 0, 100, Easing::Linear);
    let mid = t.sample(40);
    t.retarget(40, 0, 100);
    assert_eq!(t.sample(40), mid);
    assert_eq!(t.target(), 0);
}

#[test]
fn tween_shrinks_toward_a_smaller_target() {
    let t = Tween::new(200, 0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(0), 200);
    assert_eq!(t.sample(50), 100);
    assert_eq!(t.sample(100), 0);
}

#[test]
fn animator_snaps_on_first_layout_then_tweens() {
    let mut a = ScrollAnimator::new(400, Easing::Linear);
    a.retarget(208, 520, 0, SnapReasons::default());
    assert_eq!(a.offset(), 208);
    assert!(!a.is_animating());

    a.retarget(416, 520, 1000, SnapReasons::default());
    assert!(a.is_animating());
    assert_eq!(a.target(), 416);
    let mid = a.step(1200).unwrap();
    assert!(mid > 208 && mid < 416, "mid={mid}");
    assert_eq!(a.step(1400), Some(416));
    assert!(!a.is_animating());
    assert_eq!(a.step(1500), None);
}

#[test]
fn animator_snaps_when_content_resizes() {
    let mut a = ScrollAnimator::new(400, Easing::Linear);
    a.retarget(208, 520, 0, SnapReasons::default());
    a.retarget(104, 312, 0, SnapReasons::default());
    assert_eq!(a.offset(), 104);
    assert!(!a.is_animating());
}

#[test]
fn animator_cancel_fires_no_completion() {
    let mut a = ScrollAnimator::new(400, Easing::Linear);
    a.retarget(0, 520, 0, SnapReasons::default());
    a.retarget(416, 520, 0, SnapReasons::default());
    a.step(200);
    let mid = a.offset();
    assert!(mid > 0 && mid < 416);

    a.cancel();
    assert!(!a.is_animating());
    // The offset stays wherever the cancelled tween left it.
    assert_eq!(a.offset(), mid);
    assert_eq!(a.step(10_000), None);
    assert_eq!(a.offset(), mid);
}

#[test]
fn animator_retarget_replaces_the_inflight_tween() {
    let mut a = ScrollAnimator::new(400, Easing::Linear);
    a.retarget(0, 520, 0, SnapReasons::default());
    a.retarget(208, 520, 0, SnapReasons::default());
    a.step(200);
    a.retarget(416, 520, 200, SnapReasons::default());
    assert_eq!(a.target(), 416);
    assert_eq!(a.step(600), Some(416));
    assert!(!a.is_animating());
}

// ---------------------------------------------------------------------------
// Carousel paging + animation

#[test]
fn scroll_to_item_by_index_lands_on_its_page() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_item_by_index(6, 0);
    assert_eq!(c.page_number(), 1);
    assert_eq!(c.scroll_offset(), page_offset(1));
}

#[test]
fn scroll_to_key_resolves_through_the_key_mapping() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_key(&6u64, 0);
    assert_eq!(c.page_number(), 1);
}

#[test]
fn next_and_previous_clamp_at_the_ends() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.previous_page(0);
    assert_eq!(c.page_number(), 0);
    c.next_page(0);
    c.next_page(0);
    assert_eq!(c.page_number(), 2);
    c.next_page(0);
    assert_eq!(c.page_number(), 2);
    c.previous_page(0);
    assert_eq!(c.page_number(), 1);
}

#[test]
fn page_change_tweens_and_settles() {
    let mut c = Carousel::new(gallery(10), opts());
    assert!(!c.is_animating());
    c.scroll_to_page(1, 1000);
    assert!(c.is_animating());
    let mid = c.step(1200).unwrap();
    assert!(mid > 0 && mid < page_offset(1), "mid={mid}");
    assert_eq!(c.step(1400), Some(page_offset(1)));
    assert!(!c.is_animating());
    assert_eq!(c.step(1500), None);
}

#[test]
fn page_change_mid_flight_replaces_the_tween() {
    let mut c = Carousel::new(gallery(10), opts());
    c.scroll_to_page(1, 0);
    c.step(100);
    c.scroll_to_page(2, 100);
    assert!(c.is_animating());
    assert_eq!(c.layout().target_offset, page_offset(2));
    assert_eq!(c.step(500), Some(page_offset(2)));
    assert!(!c.is_animating());
}

#[test]
fn no_animation_while_state_is_being_restored() {
    let restoring = Arc::new(AtomicBool::new(true));
    let signal = Arc::clone(&restoring);
    let mut c = Carousel::new(
        gallery(10),
        opts().with_is_state_restoring(Some(move || signal.load(Ordering::SeqCst))),
    );

    c.scroll_to_page(2, 1000);
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), page_offset(2));

    // With the signal deasserted, the same change tweens again.
    restoring.store(false, Ordering::SeqCst);
    c.scroll_to_page(0, 2000);
    assert!(c.is_animating());
}

#[test]
fn animation_disabled_always_snaps() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_page(2, 0);
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), page_offset(2));
}

#[test]
fn construction_starts_at_the_default_page_without_animating() {
    let c = Carousel::new(gallery(10), opts().with_default_page(2));
    assert_eq!(c.page_number(), 2);
    assert_eq!(c.scroll_offset(), page_offset(2));
    assert!(!c.is_animating());
}

// ---------------------------------------------------------------------------
// Visibility changes + page clamping

#[test]
fn hiding_the_last_page_clamps_the_current_page() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_page(2, 0);

    // Hiding one of the two last-page items keeps page 2 alive.
    c.set_item_visible(9, false, 0);
    assert_eq!(c.page_count(), 3);
    assert_eq!(c.page_number(), 2);

    // Hiding the other removes page 2; the carousel clamps down.
    c.set_item_visible(8, false, 0);
    assert_eq!(c.page_count(), 2);
    assert_eq!(c.page_number(), 1);
    assert_eq!(c.scroll_offset(), page_offset(1));
    assert!(!c.is_animating());
}

#[test]
fn revealing_items_restores_later_pages() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    for i in 4..10 {
        c.set_item_visible(i, false, 0);
    }
    assert_eq!(c.page_count(), 1);
    c.set_item_visible(9, true, 0);
    assert_eq!(c.page_count(), 2);
    c.scroll_to_item_by_index(9, 0);
    assert_eq!(c.page_number(), 1);
}

#[test]
fn visibility_change_snaps_instead_of_animating_through_a_resize() {
    let mut c = Carousel::new(gallery(10), opts());
    c.set_item_visible(0, false, 0);
    assert!(!c.is_animating());
}

#[test]
fn end_to_end_ten_item_gallery() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_item_by_index(6, 0);
    assert_eq!(c.page_number(), 1);

    c.scroll_to_page(2, 0);
    c.batch_update(|c| {
        c.set_item_visible(9, false, 0);
        c.set_item_visible(8, false, 0);
    });
    assert_eq!(c.page_count(), 2);
    assert_eq!(c.page_number(), 1);
    assert_eq!(c.scroll_offset(), page_offset(1));
}

// ---------------------------------------------------------------------------
// Reordering

#[test]
fn reorder_triggers_rescroll_to_the_moved_items_page() {
    let seen: Arc<Mutex<Vec<(u64, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut c = Carousel::new(
        gallery(10),
        snap_opts().with_on_reorder(Some(move |key, index| {
            sink.lock().unwrap().push((key, index));
        })),
    );
    c.scroll_to_page(2, 0);

    // The off-screen item at visible index 7 moves to the front.
    c.move_item_to_index(7, 0, 0);
    assert_eq!(c.page_number(), 0);
    assert_eq!(c.scroll_offset(), 0);
    assert_eq!(&*seen.lock().unwrap(), &[(7u64, 0usize)]);

    // The visible sequence was re-derived before pagination read it.
    assert_eq!(c.flow().visible_box(0).unwrap().item, 7);
    assert_eq!(c.flow().visible_index_of(0), Some(1));
}

#[test]
fn reorder_rescroll_animates_when_enabled() {
    let mut c = Carousel::new(gallery(10), opts());
    c.scroll_to_page(2, 0);
    c.step(1000);
    assert_eq!(c.scroll_offset(), page_offset(2));

    c.move_item_to_index(7, 0, 2000);
    assert_eq!(c.page_number(), 0);
    assert!(c.is_animating());
    assert_eq!(c.step(3000), Some(0));
}

#[test]
fn moving_a_hidden_item_leaves_pagination_alone() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_page(1, 0);
    c.set_item_visible(5, false, 0);
    let page = c.page_number();

    c.move_item_to_index(5, 0, 0);
    assert_eq!(c.page_number(), page);
    assert_eq!(c.flow().child_index_of(5), Some(0));
    assert_eq!(c.flow().visible_index_of(5), None);
}

// ---------------------------------------------------------------------------
// Reset

#[test]
fn reset_is_idempotent() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    c.scroll_to_page(2, 0);

    c.reset(false, 0);
    let first = c.frame_state();
    c.reset(false, 0);
    assert_eq!(c.frame_state(), first);
    assert_eq!(c.page_number(), 0);
    assert_eq!(c.scroll_offset(), 0);
}

#[test]
fn reset_without_animate_snaps_even_when_animation_is_enabled() {
    let mut c = Carousel::new(gallery(10), opts());
    c.scroll_to_page(2, 0);
    c.step(1000);

    c.reset(false, 2000);
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), 0);
}

#[test]
fn reset_with_animate_tweens_back_to_the_default_page() {
    let mut c = Carousel::new(gallery(10), opts());
    c.scroll_to_page(2, 0);
    c.step(1000);

    c.reset(true, 2000);
    assert!(c.is_animating());
    assert_eq!(c.step(3000), Some(0));
}

// ---------------------------------------------------------------------------
// Constraint outputs: buttons, background, separators

#[test]
fn buttons_enable_by_page_position() {
    let mut c = Carousel::new(gallery(10), snap_opts());
    assert!(!c.layout().prev_button.enabled);
    assert!(c.layout().next_button.enabled);

    c.scroll_to_page(1, 0);
    assert!(c.layout().prev_button.enabled);
    assert!(c.layout().next_button.enabled);

    c.scroll_to_page(2, 0);
    assert!(c.layout().prev_button.enabled);
    assert!(!c.layout().next_button.enabled);
}

#[test]
fn background_spans_viewport_plus_visible_buttons() {
    let c = Carousel::new(gallery(10), snap_opts());
    let l = c.layout();
    assert_eq!(l.viewport.main_start, 16);
    assert_eq!(l.next_button.main_start, 16 + 208);
    assert_eq!(l.background, Extent { main: 208 + 32, cross: 30 });
    // Button preferred cross size: group max cross + 2*margin, centered.
    assert_eq!(l.prev_button.size, rect(16, 42));
    assert_eq!(l.prev_button.cross_start, (30i64 - 42) / 2);
}

#[test]
fn hidden_disabled_buttons_shrink_the_background() {
    let c = Carousel::new(gallery(10), snap_opts().with_hide_disabled_buttons(true));
    let l = c.layout();
    assert!(!l.prev_button.visible);
    assert!(l.next_button.visible);
    assert_eq!(l.viewport.main_start, 0);
    assert_eq!(l.background.main, 208 + 16);
}

#[test]
fn separators_sit_at_gap_midpoints_between_visible_items() {
    let mut c = Carousel::new(gallery(3), snap_opts().with_separators(true));
    // Starts 6, 58, 110; ends 46, 98.
    let seps: Vec<_> = c.layout().separators.clone();
    assert_eq!(
        seps,
        [
            SeparatorLine { main: 52, cross: 30 },
            SeparatorLine { main: 104, cross: 30 },
        ]
    );

    // Separators are not part of the item set: hiding an item just re-derives
    // the lines between the remaining neighbors.
    c.set_item_visible(1, false, 0);
    assert_eq!(
        c.layout().separators,
        [SeparatorLine { main: 52, cross: 30 }]
    );
}

// ---------------------------------------------------------------------------
// Notification

#[test]
fn batch_update_coalesces_on_change() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    let mut c = Carousel::new(
        gallery(10),
        snap_opts().with_on_change(Some(move |_frame| {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );
    let after_new = fired.load(Ordering::SeqCst);

    c.batch_update(|c| {
        c.set_item_visible(8, false, 0);
        c.set_item_visible(9, false, 0);
        c.scroll_to_page(1, 0);
    });
    assert_eq!(fired.load(Ordering::SeqCst), after_new + 1);
}

#[test]
fn on_change_reports_the_clamped_frame() {
    let last: Arc<Mutex<Option<CarouselFrame>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&last);
    let mut c = Carousel::new(
        gallery(10),
        snap_opts().with_on_change(Some(move |frame| {
            *sink.lock().unwrap() = Some(frame);
        })),
    );
    c.scroll_to_page(2, 0);

    let frame = last.lock().unwrap().unwrap();
    assert_eq!(frame.page, PageState { page: 2, page_count: 3 });
    assert_eq!(
        frame.scroll,
        ScrollState {
            offset: page_offset(2),
            is_animating: false,
        }
    );
    assert_eq!(frame, c.frame_state());
}

// ---------------------------------------------------------------------------
// Misc

#[test]
fn orientation_maps_main_cross_to_xy() {
    assert_eq!(Orientation::Horizontal.to_xy(3, 7), (3, 7));
    assert_eq!(Orientation::Vertical.to_xy(3, 7), (7, 3));
}

#[test]
fn into_contents_returns_items_in_original_order_after_reorder() {
    let mut c = Carousel::new(gallery(4), snap_opts());
    c.move_item_to_index(3, 0, 0);
    assert_eq!(c.into_contents(), [0, 1, 2, 3]);
}

#[test]
fn content_accessors_reach_the_wrapped_values() {
    let mut c = Carousel::new(gallery(3), snap_opts());
    assert_eq!(c.content(1), Some(&1));
    *c.content_mut(1).unwrap() = 42;
    assert_eq!(c.content(1), Some(&42));
    assert_eq!(c.content(3), None);
}
