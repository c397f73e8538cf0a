//! Conversion of a stitch stream into drawable strokes

use crate::io::error::{PatternError, Result};
use crate::pattern::Pattern;

/// Segment between two consecutive stitches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Position of the preceding stitch (the stitch itself for the first one)
    pub from: [i32; 2],
    /// Position of the stitch that ends the segment
    pub to: [i32; 2],
    /// Thread color of the ending stitch
    pub color: [u8; 3],
    /// False for jumps, trims, stops and the end marker
    pub visible: bool,
}

impl Stroke {
    /// Euclidean length in pattern units
    pub fn length(&self) -> f64 {
        let dx = f64::from(self.to[0]) - f64::from(self.from[0]);
        let dy = f64::from(self.to[1]) - f64::from(self.from[1]);
        dx.hypot(dy)
    }
}

/// Build one stroke per stitch, in playback order
///
/// # Errors
///
/// Returns [`PatternError::InvalidColorIndex`] if a stitch refers past the end of
/// the palette, which happens when the pattern was never reconciled.
pub fn strokes(pattern: &Pattern) -> Result<Vec<Stroke>> {
    let palette_len = pattern.colors().len();
    let mut previous = pattern.stitches().first().map(|stitch| stitch.position());
    let mut strokes = Vec::with_capacity(pattern.len());

    for stitch in pattern.stitches() {
        let color = pattern
            .color_of(stitch)
            .ok_or(PatternError::InvalidColorIndex {
                index: stitch.color,
                palette_len,
            })?;
        let to = stitch.position();

        strokes.push(Stroke {
            from: previous.unwrap_or(to),
            to,
            color: color.rgb(),
            visible: stitch.flags.is_sewn(),
        });
        previous = Some(to);
    }

    Ok(strokes)
}
