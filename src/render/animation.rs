//! Stitch-out animation: the pattern sewn progressively, exported as a GIF

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::{
    DEFAULT_STITCHES_PER_FRAME, FINAL_FRAME_HOLD, GIF_FRAME_DELAY_MS, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{PatternError, Result, ensure_parent_dir, invalid_parameter};
use crate::pattern::Pattern;
use crate::render::raster::RasterRenderer;
use crate::render::strokes::strokes;

/// Renders a pattern stroke by stroke into animation frames
#[derive(Debug, Clone)]
pub struct StitchOutAnimation {
    /// Renderer used for every frame
    pub renderer: RasterRenderer,
    /// Stitches sewn between consecutive frames
    pub stitches_per_frame: usize,
    /// Requested delay between frames
    pub frame_delay_ms: u32,
}

impl Default for StitchOutAnimation {
    fn default() -> Self {
        Self {
            renderer: RasterRenderer::default(),
            stitches_per_frame: DEFAULT_STITCHES_PER_FRAME,
            frame_delay_ms: GIF_FRAME_DELAY_MS,
        }
    }
}

impl StitchOutAnimation {
    /// Delay actually written and the number of stitches between written frames
    ///
    /// Delays below what viewers reliably support are raised to that minimum, and
    /// proportionally more stitches go into each frame so the apparent sewing speed
    /// is kept. For example a 20ms request becomes 50ms with 3x the stitches.
    pub const fn effective_timing(&self) -> (u32, usize) {
        let delay = if self.frame_delay_ms > VIEWER_MIN_FRAME_DELAY_MS {
            self.frame_delay_ms
        } else {
            VIEWER_MIN_FRAME_DELAY_MS
        };
        let skip_factor = if self.frame_delay_ms == 0 {
            1
        } else if self.frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(self.frame_delay_ms)
        } else {
            1
        };
        (
            delay,
            self.stitches_per_frame.saturating_mul(skip_factor as usize),
        )
    }

    /// Build every frame: an empty canvas, one frame per batch of stitches, and a
    /// held copy of the finished pattern
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `stitches_per_frame` is zero
    /// - The pattern cannot be rendered (no stitches, unreconciled palette)
    pub fn frames(&self, pattern: &Pattern) -> Result<Vec<Frame>> {
        if self.stitches_per_frame == 0 {
            return Err(invalid_parameter(
                "stitches_per_frame",
                &self.stitches_per_frame,
                &"must be at least 1",
            ));
        }

        let strokes = strokes(pattern)?;
        let bounds = pattern.bounds();
        let mut canvas = self.renderer.blank_canvas(pattern)?;
        let (delay_ms, batch) = self.effective_timing();

        let mut frames = Vec::with_capacity(strokes.len().div_ceil(batch) + 2);
        frames.push(Self::frame(canvas.clone(), delay_ms));

        for chunk in strokes.chunks(batch) {
            self.renderer.draw_strokes(&mut canvas, bounds, chunk);
            frames.push(Self::frame(canvas.clone(), delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(Self::frame(canvas, delay_ms.saturating_mul(FINAL_FRAME_HOLD)));

        Ok(frames)
    }

    /// Export the stitch-out as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Frame generation fails (see [`Self::frames`])
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, pattern: &Pattern, output_path: &Path) -> Result<()> {
        let frames = self.frames(pattern)?;

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| PatternError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| PatternError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn frame(image: RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
