//! Scroll reset policy.

use serde::Serialize;

/// How a navigation was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    Push,
    Replace,
    /// Back/forward through history.
    Traverse,
}

/// Viewport scroll destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScrollPosition {
    pub top: u32,
    pub left: u32,
}

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition { top: 0, left: 0 };
}

/// Every navigation scrolls to the top, including back/forward traversal.
pub fn scroll_behavior(_kind: NavigationKind) -> ScrollPosition {
    ScrollPosition::TOP
}
