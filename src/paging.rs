//! Pure pagination math.
//!
//! These functions have no side effects and no error paths. `items_per_page`
//! must be >= 1; zero is a configuration error (debug-asserted) and is treated
//! as 1 so release builds degrade silently instead of dividing by zero.

fn normalize_ipp(items_per_page: usize) -> usize {
    debug_assert!(items_per_page >= 1, "items_per_page must be >= 1");
    items_per_page.max(1)
}

/// Number of pages needed to show `visible_count` items.
///
/// Always >= 1: an empty carousel still shows one blank page.
pub fn count_pages(visible_count: usize, items_per_page: usize) -> usize {
    visible_count.div_ceil(normalize_ipp(items_per_page)).max(1)
}

/// Clamps a page number so it never references a nonexistent page.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.saturating_sub(1))
}

/// The page a given visible index falls on.
pub fn page_of(visible_index: usize, items_per_page: usize) -> usize {
    visible_index / normalize_ipp(items_per_page)
}

/// The visible index of the first item on a page.
pub fn first_on_page(page: usize, items_per_page: usize) -> usize {
    page.saturating_mul(normalize_ipp(items_per_page))
}

/// Upper bound on the page number, computed against the *total* item count.
///
/// Hidden items can become visible later, so the stored page number is allowed
/// to range over all pages the full item set could occupy, not just the pages
/// that currently exist.
pub fn max_possible_pages(total_count: usize, items_per_page: usize) -> usize {
    count_pages(total_count, items_per_page)
}
