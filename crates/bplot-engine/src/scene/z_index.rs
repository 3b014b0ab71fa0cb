/// Paint layer; higher values are drawn over lower ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layer used by application states.
    pub const SCENE: ZIndex = ZIndex(0);
    /// Layer used by the overlay UI, above every state.
    pub const OVERLAY: ZIndex = ZIndex(1_000);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn above(self, n: i32) -> Self {
        Self(self.0 + n)
    }
}
