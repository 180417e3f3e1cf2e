//! Axis-aligned rectangle geometry
//!
//! Rectangles are stored as center + extents, matching how paddles and the
//! ball's bounding box are positioned on the board.

use glam::Vec2;

/// An axis-aligned rectangle defined by its center point and full extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Left edge x coordinate
    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    /// Top edge y coordinate
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.height / 2.0
    }
}

/// True iff either endpoint of `[a0, a1]` lies strictly inside `(b0, b1)`.
///
/// Touching intervals do not count, and an interval that fully contains the
/// other is not detected. That containment gap is accepted on purpose: the
/// ball's bounding box is always narrower than a paddle on the axis that
/// matters, and the sub-stepped motion means it enters edge-first. Gameplay
/// is tuned around this exact test, so it must not be replaced with a full
/// interval-intersection check.
#[inline]
fn spans_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> bool {
    (a0 > b0 && a0 < b1) || (a1 > b0 && a1 < b1)
}

/// Overlap test between two rectangles, strict on both axes.
///
/// Asymmetric: only `a`'s edges are tested against `b`'s span. Call with the
/// ball as `a` and the paddle as `b`.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    spans_overlap(a.left(), a.right(), b.left(), b.right())
        && spans_overlap(a.top(), a.bottom(), b.top(), b.bottom())
}
