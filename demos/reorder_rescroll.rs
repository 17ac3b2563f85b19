// Example: external reordering re-scrolls to the moved item's new page.
use carousel::{Carousel, CarouselItem, CarouselOptions, Rect};

fn main() {
    let items = (0..10)
        .map(|i| CarouselItem::new(format!("tile-{i}"), Rect::new(40, 30)))
        .collect();
    let mut c = Carousel::new(
        items,
        CarouselOptions::new()
            .with_items_per_page(4)
            .with_on_reorder(Some(|key: u64, index: usize| {
                println!("reorder: item key={key} now at child index {index}");
            })),
    );

    let mut now_ms = 0u64;
    c.scroll_to_page(2, now_ms);
    while c.is_animating() {
        now_ms += 16;
        c.step(now_ms);
    }
    println!("before: page={} offset={}", c.page_number(), c.scroll_offset());

    // An instrumentation layer moves the off-screen item at index 7 to the
    // front; the carousel follows it to page 0.
    c.move_item_to_index(7, 0, now_ms);
    while c.is_animating() {
        now_ms += 16;
        c.step(now_ms);
    }
    println!(
        "after: page={} offset={} first-visible-item={}",
        c.page_number(),
        c.scroll_offset(),
        c.flow().visible_box(0).map(|b| b.item).unwrap_or(usize::MAX)
    );
}
