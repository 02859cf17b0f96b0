//! Cross-axis alignment of a child inside its parent.

/// Vertical alignment of children inside a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    #[default]
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    /// Offset of a child of height `child` inside `available` pixels.
    /// Never negative, so an oversized child stays anchored at the top.
    pub fn align(self, available: i32, child: i32) -> i32 {
        let free = available.saturating_sub(child).max(0);
        match self {
            VerticalAlignment::Top => 0,
            VerticalAlignment::CenterVertically => free / 2,
            VerticalAlignment::Bottom => free,
        }
    }
}
