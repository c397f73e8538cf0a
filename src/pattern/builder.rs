//! Append-only pattern state
//!
//! Stitches and colors are only ever appended. The relative-motion cursor and the
//! current color index are tracked alongside so that callers decoding a machine
//! stream can feed it one instruction at a time.

use log::{debug, trace};
use rand::{SeedableRng, rngs::StdRng};

use crate::pattern::color::Color;
use crate::pattern::geometry::BoundingBox;
use crate::pattern::stitch::{ColorIndex, Stitch, StitchFlags};

/// An embroidery pattern: ordered stitches plus a thread palette
///
/// Stitch order is playback order and is never rearranged. The bounding box is
/// derived state and stays at its default until explicitly recomputed or until an
/// `END` stitch is appended.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) colors: Vec<Color>,
    pub(crate) stitches: Vec<Stitch>,
    last_x: i32,
    last_y: i32,
    current_color_index: ColorIndex,
    pub(crate) bounds: BoundingBox,
    pub(crate) rng: StdRng,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern {
    /// Create an empty pattern whose random palette entries come from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an empty pattern with reproducible random palette entries
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    const fn with_rng(rng: StdRng) -> Self {
        Self {
            colors: Vec::new(),
            stitches: Vec::new(),
            last_x: 0,
            last_y: 0,
            current_color_index: 0,
            bounds: BoundingBox::ZERO,
            rng,
        }
    }

    /// Append a color built from its channels
    pub fn add_color_rgb(&mut self, r: u8, g: u8, b: u8, description: impl Into<String>) {
        self.add_color(Color::new(r, g, b, description));
    }

    /// Append a color to the end of the palette
    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Append a stitch at an absolute position
    ///
    /// - `END` first recomputes the bounding box and reconciles the palette over the
    ///   stitches appended so far, then appends the terminator itself.
    /// - `STOP` on an empty pattern is dropped silently.
    /// - `STOP` with `auto_color_index` advances the current color before the stitch
    ///   is created, so the stop and everything after it use the next palette entry.
    pub fn add_stitch_abs(&mut self, x: i32, y: i32, flags: StitchFlags, auto_color_index: bool) {
        if flags.contains(StitchFlags::END) {
            debug!(
                "Finalizing pattern with {} stitches and {} colors",
                self.stitches.len(),
                self.colors.len()
            );
            self.calculate_bounding_box();
            self.fix_color_count();
        }

        if flags.contains(StitchFlags::STOP) {
            if self.stitches.is_empty() {
                debug!("Dropping leading stop at ({x}, {y})");
                return;
            }
            if auto_color_index {
                self.current_color_index += 1;
                debug!(
                    "Color change to index {} at stitch {}",
                    self.current_color_index,
                    self.stitches.len()
                );
            }
        }

        trace!("Stitch ({x}, {y}) flags {flags:?}");
        self.stitches
            .push(Stitch::new(x, y, flags, self.current_color_index));
    }

    /// Append a stitch displaced from the relative-motion cursor
    ///
    /// The very first stitch of a pattern treats `(dx, dy)` as absolute and leaves
    /// the cursor untouched; every later call moves the cursor before delegating to
    /// [`Self::add_stitch_abs`].
    pub fn add_stitch_rel(&mut self, dx: i32, dy: i32, flags: StitchFlags, auto_color_index: bool) {
        if self.stitches.is_empty() {
            self.add_stitch_abs(dx, dy, flags, auto_color_index);
        } else {
            let nx = self.last_x.saturating_add(dx);
            let ny = self.last_y.saturating_add(dy);
            self.last_x = nx;
            self.last_y = ny;
            self.add_stitch_abs(nx, ny, flags, auto_color_index);
        }
    }

    /// Stitches in playback order
    pub fn stitches(&self) -> &[Stitch] {
        &self.stitches
    }

    /// Palette in index order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Most recently computed bounding box
    pub const fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Relative-motion cursor as `[last_x, last_y]`
    pub const fn cursor(&self) -> [i32; 2] {
        [self.last_x, self.last_y]
    }

    /// Palette index assigned to the next stitch
    pub const fn current_color_index(&self) -> ColorIndex {
        self.current_color_index
    }

    /// Number of stitches
    pub fn len(&self) -> usize {
        self.stitches.len()
    }

    /// Whether no stitch has been appended
    pub fn is_empty(&self) -> bool {
        self.stitches.is_empty()
    }

    /// Whether the last stitch terminates the pattern
    pub fn is_finalized(&self) -> bool {
        self.stitches
            .last()
            .is_some_and(|stitch| stitch.flags.contains(StitchFlags::END))
    }

    /// Palette entry a stitch refers to, if the palette covers it
    pub fn color_of(&self, stitch: &Stitch) -> Option<&Color> {
        self.colors.get(stitch.color)
    }
}
