//! Needle positions and their motion flags

use bitflags::bitflags;

/// Index into a pattern's palette
///
/// Stitches refer to colors by position rather than by reference because the
/// palette is grown and truncated independently during reconciliation.
pub type ColorIndex = usize;

bitflags! {
    /// Motion semantics of a stitch
    ///
    /// The bits are independent. A normal stitch has no bit set; in practice a
    /// stitch carries at most one bit, but combinations stay representable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StitchFlags: u8 {
        /// Move the needle without sewing
        const JUMP = 1 << 0;
        /// Cut the thread; excluded from the bounding box
        const TRIM = 1 << 1;
        /// Pause the machine, optionally to change thread
        const STOP = 1 << 2;
        /// Pattern terminator; finalizes the pattern when appended
        const END = 1 << 3;
    }
}

impl StitchFlags {
    /// Plain sewing motion (no flag bits)
    pub const NORMAL: Self = Self::empty();

    /// Flags marking a stitch as a transition rather than sewn thread
    pub const TRANSITION: Self = Self::JUMP
        .union(Self::TRIM)
        .union(Self::STOP)
        .union(Self::END);

    /// Whether the stitch sews thread between its predecessor and itself
    pub const fn is_sewn(self) -> bool {
        !self.intersects(Self::TRANSITION)
    }
}

/// A single needle placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stitch {
    /// Horizontal position in pattern space
    pub x: i32,
    /// Vertical position in pattern space
    pub y: i32,
    /// Motion semantics
    pub flags: StitchFlags,
    /// Palette entry the stitch is sewn with
    pub color: ColorIndex,
}

impl Stitch {
    /// Create a stitch at the given position
    pub const fn new(x: i32, y: i32, flags: StitchFlags, color: ColorIndex) -> Self {
        Self { x, y, flags, color }
    }

    /// Position as `[x, y]`
    pub const fn position(&self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Whether the stitch is a thread cut
    pub const fn is_trim(&self) -> bool {
        self.flags.contains(StitchFlags::TRIM)
    }
}
