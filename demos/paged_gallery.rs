// Example: a 10-item paged gallery driven by a simulated frame clock.
use carousel::{Carousel, CarouselItem, CarouselOptions, Rect};

fn main() {
    let items = (0..10)
        .map(|i| CarouselItem::new(format!("tile-{i}"), Rect::new(40, 30)))
        .collect();
    let mut c = Carousel::new(
        items,
        CarouselOptions::new()
            .with_items_per_page(4)
            .with_spacing(12)
            .with_margin(6),
    );

    let l = c.layout();
    println!(
        "pages={} clip={:?} background={:?}",
        c.page_count(),
        l.viewport.clip(),
        l.background
    );

    // Page forward; a UI would call step() from its frame timer.
    let mut now_ms = 0u64;
    c.next_page(now_ms);
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.step(now_ms) {
            println!("t={now_ms}ms offset={off}");
        }
    }
    println!("settled: page={} offset={}", c.page_number(), c.scroll_offset());

    // Hiding the last page's items clamps the current page down.
    c.scroll_to_page(2, now_ms);
    while c.step(now_ms).is_some() {
        now_ms += 16;
    }
    c.batch_update(|c| {
        c.set_item_visible(8, false, now_ms);
        c.set_item_visible(9, false, now_ms);
    });
    println!(
        "after hiding items 8-9: pages={} page={} offset={}",
        c.page_count(),
        c.page_number(),
        c.scroll_offset()
    );
}
