//! A headless paged-carousel engine.
//!
//! This crate implements the layout, pagination, and scroll-animation logic of a
//! paged "carousel" widget: a fixed viewport showing `items_per_page` uniformly
//! sized items at a time, with next/previous paging, per-item visibility,
//! external reordering, and tween-based scrolling between pages.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - content values for the items (opaque to this crate)
//! - intrinsic item sizes on the scroll axis / cross axis
//! - a stepping clock (call [`Carousel::step`] each frame)
//!
//! and to consume the computed [`CarouselLayout`] (viewport clip, button
//! frames, separators, background extent) plus the animated scroll offset.
//! All geometry is expressed in main/cross coordinates; [`Orientation`] maps
//! them to x/y on the host side.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod align;
mod animator;
mod carousel;
mod constraint;
mod flow;
mod options;
mod paging;
mod state;
mod tween;
mod types;
mod viewport;

#[cfg(test)]
mod tests;

pub use align::{AlignBox, AlignGroup};
pub use animator::{ScrollAnimator, SnapReasons};
pub use carousel::{Carousel, CarouselItem};
pub use constraint::{ButtonFrame, CarouselConstraint, CarouselLayout, SeparatorLine};
pub use flow::{ScrollingFlowBox, VisibleBox};
pub use options::{
    CarouselOptions, OnChangeCallback, ReorderCallback, StateRestoringSignal,
};
pub use paging::{clamp_page, count_pages, first_on_page, max_possible_pages, page_of};
pub use state::{CarouselFrame, PageState, ScrollState};
pub use tween::{Easing, Tween};
pub use types::{Extent, ItemKey, Orientation, Rect};
pub use viewport::ViewportWindow;
