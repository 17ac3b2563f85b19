use alloc::sync::Arc;

use crate::state::CarouselFrame;
use crate::tween::Easing;
use crate::types::{ItemKey, Orientation};

/// A callback fired when the carousel's pagination or scroll state changes.
pub type OnChangeCallback = Arc<dyn Fn(CarouselFrame) + Send + Sync>;

/// A callback fired after an item has been moved to a new child index.
///
/// Arguments are the moved item's key and its new child index. This is the
/// notification channel a host persistence/instrumentation layer listens on.
pub type ReorderCallback<K> = Arc<dyn Fn(K, usize) + Send + Sync>;

/// An external boolean signal: "state is currently being restored".
///
/// While asserted, page changes apply immediately instead of animating, so
/// bulk state loads never tween. The signal is an opaque input; this crate
/// only reads it.
pub type StateRestoringSignal = Arc<dyn Fn() -> bool + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is cheap to clone: callback fields are stored in `Arc`s.
pub struct CarouselOptions<K = ItemKey> {
    pub orientation: Orientation,
    /// Items shown per page. Must be >= 1; zero is debug-asserted and treated
    /// as 1 in release builds.
    pub items_per_page: usize,
    /// Space between adjacent visible items. Must be >= `margin`.
    pub spacing: u32,
    /// Space between the viewport edges and the items at each end of a page.
    pub margin: u32,
    /// The page shown initially and returned to by `reset`. Must be within
    /// the maximum possible page range for the full item set.
    pub default_page: usize,

    /// Globally enables/disables page-change animation.
    pub animation_enabled: bool,
    pub animation_duration_ms: u64,
    pub easing: Easing,

    /// Renders a separator between each adjacent pair of visible items.
    /// Separators live in the layout output only; they are never part of the
    /// paginated/orderable item set.
    pub separators: bool,
    /// Main-axis thickness of the next/previous buttons.
    pub button_main_size: u32,
    /// Hides (rather than merely disables) a button when it cannot be pressed.
    pub hide_disabled_buttons: bool,

    /// Stable identity for the item at a given *original* item index.
    ///
    /// Keys follow items across reordering: the reorder notification reports
    /// the moved item's key, and `scroll_to_key` resolves through this.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    pub is_state_restoring: Option<StateRestoringSignal>,
    pub on_change: Option<OnChangeCallback>,
    pub on_reorder: Option<ReorderCallback<K>>,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            orientation: self.orientation,
            items_per_page: self.items_per_page,
            spacing: self.spacing,
            margin: self.margin,
            default_page: self.default_page,
            animation_enabled: self.animation_enabled,
            animation_duration_ms: self.animation_duration_ms,
            easing: self.easing,
            separators: self.separators,
            button_main_size: self.button_main_size,
            hide_disabled_buttons: self.hide_disabled_buttons,
            get_item_key: Arc::clone(&self.get_item_key),
            is_state_restoring: self.is_state_restoring.clone(),
            on_change: self.on_change.clone(),
            on_reorder: self.on_reorder.clone(),
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for a carousel keyed by item index (`ItemKey = u64`).
    pub fn new() -> Self {
        Self::new_with_key(|i| i as u64)
    }
}

impl Default for CarouselOptions<ItemKey> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_item_key(i)` should return a stable identity for the item at
    /// original index `i`.
    pub fn new_with_key(get_item_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            items_per_page: 4,
            spacing: 12,
            margin: 6,
            default_page: 0,
            animation_enabled: true,
            animation_duration_ms: 400,
            easing: Easing::EaseInOutCubic,
            separators: false,
            button_main_size: 16,
            hide_disabled_buttons: false,
            get_item_key: Arc::new(get_item_key),
            is_state_restoring: None,
            on_change: None,
            on_reorder: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_default_page(mut self, default_page: usize) -> Self {
        self.default_page = default_page;
        self
    }

    pub fn with_animation_enabled(mut self, animation_enabled: bool) -> Self {
        self.animation_enabled = animation_enabled;
        self
    }

    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_separators(mut self, separators: bool) -> Self {
        self.separators = separators;
        self
    }

    pub fn with_button_main_size(mut self, button_main_size: u32) -> Self {
        self.button_main_size = button_main_size;
        self
    }

    pub fn with_hide_disabled_buttons(mut self, hide_disabled_buttons: bool) -> Self {
        self.hide_disabled_buttons = hide_disabled_buttons;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_is_state_restoring(
        mut self,
        signal: Option<impl Fn() -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.is_state_restoring = signal.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(CarouselFrame) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_reorder(
        mut self,
        on_reorder: Option<impl Fn(K, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_reorder = on_reorder.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("orientation", &self.orientation)
            .field("items_per_page", &self.items_per_page)
            .field("spacing", &self.spacing)
            .field("margin", &self.margin)
            .field("default_page", &self.default_page)
            .field("animation_enabled", &self.animation_enabled)
            .field("animation_duration_ms", &self.animation_duration_ms)
            .field("easing", &self.easing)
            .field("separators", &self.separators)
            .field("button_main_size", &self.button_main_size)
            .field("hide_disabled_buttons", &self.hide_disabled_buttons)
            .finish_non_exhaustive()
    }
}
