/// Paint layer. Higher values are drawn on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Clock face and hands.
    pub const FACE: ZIndex = ZIndex(0);
    /// Menu bar and open drop-downs.
    pub const CHROME: ZIndex = ZIndex(100);
    /// Modal dialogs.
    pub const MODAL: ZIndex = ZIndex(200);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
