/// A lightweight snapshot of the current pagination state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageState {
    /// The current page, already clamped against `page_count`.
    pub page: usize,
    /// Derived page count; always >= 1, even with zero visible items.
    pub page_count: usize,
}

/// A lightweight snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Distance scrolled into the content, in main-axis units. The host applies
    /// this as a negative translation of the scrolling container.
    pub offset: u64,
    /// Whether a page-change tween is currently in flight.
    pub is_animating: bool,
}

/// A combined snapshot of pagination + scroll state.
///
/// This is the payload of the `on_change` callback, so listeners can react to
/// state updates without holding a reference to the carousel itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselFrame {
    pub page: PageState,
    pub scroll: ScrollState,
}
