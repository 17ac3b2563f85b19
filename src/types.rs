/// The scroll axis of a carousel.
///
/// All geometry in this crate is expressed in (main, cross) coordinates, where
/// `main` is the scroll axis. The computations are orientation-symmetric; the
/// orientation only matters when the host maps results back to x/y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Maps a (main, cross) pair to (x, y).
    pub fn to_xy<A>(self, main: A, cross: A) -> (A, A) {
        match self {
            Self::Horizontal => (main, cross),
            Self::Vertical => (cross, main),
        }
    }
}

/// A footprint on the scroll axis (`main`) and the opposite axis (`cross`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: u32,
    pub cross: u32,
}

impl Rect {
    pub fn new(main: u32, cross: u32) -> Self {
        Self { main, cross }
    }

    /// Component-wise maximum of two footprints.
    pub fn max(self, other: Self) -> Self {
        Self {
            main: self.main.max(other.main),
            cross: self.cross.max(other.cross),
        }
    }
}

/// An extent whose main-axis size can exceed `u32` (e.g. the laid-out content
/// of many items end-to-end, or a clip/background region).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub main: u64,
    pub cross: u32,
}

impl Extent {
    pub const ZERO: Self = Self { main: 0, cross: 0 };

    /// A zero-sized extent renders nothing.
    pub fn is_empty(&self) -> bool {
        self.main == 0 || self.cross == 0
    }
}

/// Default item key type (stable identity for reorder/instrumentation naming).
pub type ItemKey = u64;
