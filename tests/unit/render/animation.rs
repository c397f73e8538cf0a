//! Tests for stitch-out animation frames and GIF export

#[cfg(test)]
mod tests {
    use stitchpattern::PatternError;
    use stitchpattern::pattern::{Pattern, StitchFlags};
    use stitchpattern::render::RasterRenderer;
    use stitchpattern::render::animation::StitchOutAnimation;

    fn five_stitch_pattern() -> Pattern {
        let mut pattern = Pattern::with_seed(8);
        for x in 0..4 {
            pattern.add_stitch_abs(x * 2, x, StitchFlags::NORMAL, false);
        }
        pattern.add_stitch_abs(6, 3, StitchFlags::END, false);
        pattern
    }

    // Short delays are raised to the viewer minimum with proportionally larger batches
    // Verified by keeping the requested delay
    #[test]
    fn test_effective_timing() {
        let fast = StitchOutAnimation {
            stitches_per_frame: 20,
            frame_delay_ms: 20,
            ..StitchOutAnimation::default()
        };
        assert_eq!(fast.effective_timing(), (50, 60));

        let slow = StitchOutAnimation {
            stitches_per_frame: 4,
            frame_delay_ms: 100,
            ..StitchOutAnimation::default()
        };
        assert_eq!(slow.effective_timing(), (100, 4));
    }

    // Extreme timing values saturate instead of overflowing
    // Verified by multiplying the hold and batch sizes unchecked
    #[test]
    fn test_extreme_timing_saturates() -> stitchpattern::Result<()> {
        let huge_batch = StitchOutAnimation {
            stitches_per_frame: usize::MAX,
            frame_delay_ms: 1,
            ..StitchOutAnimation::default()
        };
        assert_eq!(huge_batch.effective_timing(), (50, usize::MAX));

        let long_delay = StitchOutAnimation {
            frame_delay_ms: u32::MAX,
            ..StitchOutAnimation::default()
        };
        let frames = long_delay.frames(&five_stitch_pattern())?;
        let (numer, _) = frames
            .last()
            .map(|frame| frame.delay().numer_denom_ms())
            .unwrap_or((0, 1));
        assert_eq!(numer, u32::MAX);
        Ok(())
    }

    // One blank frame, one per batch, and a held final frame
    // Verified by dropping the held final frame
    #[test]
    fn test_frame_count() -> stitchpattern::Result<()> {
        let animation = StitchOutAnimation {
            renderer: RasterRenderer::default(),
            stitches_per_frame: 2,
            frame_delay_ms: 100,
        };
        let frames = animation.frames(&five_stitch_pattern())?;
        assert_eq!(frames.len(), 5);

        let (numer, denom) = frames
            .last()
            .map(|frame| frame.delay().numer_denom_ms())
            .unwrap_or((0, 1));
        assert_eq!(numer / denom, 2_500);
        Ok(())
    }

    // Zero stitches per frame is rejected
    // Verified by removing the parameter check
    #[test]
    fn test_zero_batch_rejected() {
        let animation = StitchOutAnimation {
            stitches_per_frame: 0,
            ..StitchOutAnimation::default()
        };
        assert!(matches!(
            animation.frames(&five_stitch_pattern()),
            Err(PatternError::InvalidParameter { .. })
        ));
    }

    // Tests GIF file creation in a fresh directory
    // Verified by disabling the encoder
    #[test]
    fn test_export_gif_creates_file() -> stitchpattern::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("stitch_out.gif");

        StitchOutAnimation::default().export_gif(&five_stitch_pattern(), &path)?;
        assert!(path.exists(), "GIF file should be created");
        Ok(())
    }
}
