use crate::tween::{Easing, Tween};

/// Conditions under which a retarget applies the new offset immediately
/// instead of tweening toward it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapReasons {
    /// Animation is globally disabled.
    pub animation_disabled: bool,
    /// The external "state is being restored" signal is asserted.
    pub state_restoring: bool,
    /// The caller explicitly requested a snap (e.g. `reset(animate = false)`).
    pub forced: bool,
}

/// Owns the scroll offset of the content container and transitions it between
/// page offsets, either instantly or via a cancellable tween.
///
/// The "is animating" flag is derived from tween presence, so cancellation is
/// synchronous and can never leave the flag stale. A cancelled tween fires no
/// completion effects.
#[derive(Clone, Debug, Default)]
pub struct ScrollAnimator {
    offset: u64,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
    last_content_main: Option<u64>,
}

impl ScrollAnimator {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            offset: 0,
            tween: None,
            duration_ms,
            easing,
            last_content_main: None,
        }
    }

    /// Current offset of the content container.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The offset the animator is settling toward (the current offset when
    /// idle).
    pub fn target(&self) -> u64 {
        self.tween.map_or(self.offset, |t| t.target())
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Synchronously drops any in-flight tween, leaving the offset where it is.
    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Computes a new transition toward `target`.
    ///
    /// Any in-flight tween is cancelled first, so two overlapping tweens can
    /// never race to set the offset. The move is applied immediately when any
    /// snap reason holds, when this is the first layout pass, or when the
    /// content extent changed since the last retarget (animating through a
    /// resize looks wrong and is suppressed).
    pub fn retarget(&mut self, target: u64, content_main: u64, now_ms: u64, snap: SnapReasons) {
        self.tween = None;

        let first_layout = self.last_content_main.is_none();
        let content_resized = self.last_content_main.is_some_and(|m| m != content_main);
        self.last_content_main = Some(content_main);

        if snap.forced
            || snap.animation_disabled
            || snap.state_restoring
            || first_layout
            || content_resized
        {
            ctrace!(to = target, first_layout, content_resized, "retarget: snap");
            self.offset = target;
            return;
        }

        if target == self.offset {
            return;
        }

        ctrace!(from = self.offset, to = target, "retarget: tween");
        self.tween = Some(Tween::new(
            self.offset,
            target,
            now_ms,
            self.duration_ms,
            self.easing,
        ));
    }

    /// Advances the animator by the shared stepping clock.
    ///
    /// Returns `Some(offset)` whenever a tween was active this tick; the tween
    /// is cleared once it completes. Returns `None` when idle, so zero, one,
    /// or many steps between two retargets are all correct.
    pub fn step(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;

        self.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }

        Some(self.offset)
    }
}
