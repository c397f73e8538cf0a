//! Bounding box computation and in-place coordinate transforms

use crate::pattern::builder::Pattern;

/// Axis-aligned box enclosing the sewn extent of a pattern
///
/// Coordinates are inclusive and live in pattern space, where `top` is the
/// smallest `y` and `bottom` the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Smallest `y`
    pub top: i32,
    /// Largest `y`
    pub bottom: i32,
    /// Smallest `x`
    pub left: i32,
    /// Largest `x`
    pub right: i32,
}

impl BoundingBox {
    /// Box before any computation has run
    pub const ZERO: Self = Self {
        top: 0,
        bottom: 0,
        left: 0,
        right: 0,
    };

    /// Box reported for a pattern without stitches
    pub const EMPTY_FALLBACK: Self = Self {
        top: 0,
        bottom: 1,
        left: 0,
        right: 1,
    };

    // Extrema seeds: any real coordinate replaces them on the first comparison
    const SENTINEL: Self = Self {
        top: i32::MAX,
        bottom: i32::MIN,
        left: i32::MAX,
        right: i32::MIN,
    };

    /// Horizontal extent (`right - left`)
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent (`bottom - top`)
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether the box still holds its extrema seeds
    ///
    /// Happens when every stitch of a non-empty pattern is a trim.
    pub const fn is_inverted(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Check if a position lies inside the box
    pub const fn contains(&self, pos: [i32; 2]) -> bool {
        pos[0] >= self.left && pos[0] <= self.right && pos[1] >= self.top && pos[1] <= self.bottom
    }

    const fn include(&mut self, x: i32, y: i32) {
        if x < self.left {
            self.left = x;
        }
        if y < self.top {
            self.top = y;
        }
        if x > self.right {
            self.right = x;
        }
        if y > self.bottom {
            self.bottom = y;
        }
    }
}

impl Pattern {
    /// Recompute the bounding box over every stitch that is not a trim
    ///
    /// An empty pattern gets [`BoundingBox::EMPTY_FALLBACK`]. A pattern made only of
    /// trims keeps the extrema seeds, which [`BoundingBox::is_inverted`] reports.
    pub fn calculate_bounding_box(&mut self) {
        if self.stitches.is_empty() {
            self.bounds = BoundingBox::EMPTY_FALLBACK;
            return;
        }

        let mut bounds = BoundingBox::SENTINEL;
        for stitch in self.stitches.iter().filter(|stitch| !stitch.is_trim()) {
            bounds.include(stitch.x, stitch.y);
        }
        self.bounds = bounds;
    }

    /// Translate the pattern so the bounding box starts at the origin
    ///
    /// Uses the current bounding box as is; call [`Self::calculate_bounding_box`]
    /// first if stitches changed. A second call without changes is a no-op.
    pub fn move_to_positive(&mut self) {
        let BoundingBox { left, top, .. } = self.bounds;
        for stitch in &mut self.stitches {
            stitch.x = stitch.x.saturating_sub(left);
            stitch.y = stitch.y.saturating_sub(top);
        }
        self.bounds.right = self.bounds.right.saturating_sub(left);
        self.bounds.left = 0;
        self.bounds.bottom = self.bounds.bottom.saturating_sub(top);
        self.bounds.top = 0;
    }

    /// Mirror the pattern across the horizontal axis
    ///
    /// Negates every `y` and swaps `top`/`bottom` accordingly; applying it twice
    /// restores the original coordinates.
    pub fn invert_pattern_vertical(&mut self) {
        let old_top = self.bounds.top;
        for stitch in &mut self.stitches {
            stitch.y = stitch.y.saturating_neg();
        }
        self.bounds.top = self.bounds.bottom.saturating_neg();
        self.bounds.bottom = old_top.saturating_neg();
    }
}
