use core::cmp::Ordering;

/// Layer key for recorded draw items.
///
/// Scene levels map onto consecutive layers; higher layers paint over lower ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layer reserved for debug overlays, above every scene level.
    pub const OVERLAY: ZIndex = ZIndex(i32::MAX);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Layer for scene level `index`.
    #[inline]
    pub fn for_level(index: usize) -> Self {
        Self(i32::try_from(index).unwrap_or(i32::MAX - 1))
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
