//! Tests for PNG export of rendered patterns

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use stitchpattern::io::image::{export_pattern_as_png, export_png};
    use stitchpattern::pattern::{Pattern, StitchFlags};
    use stitchpattern::render::{RasterRenderer, Renderer};

    // Renders every pattern as a single pixel in the first thread color
    struct SwatchRenderer;

    impl Renderer for SwatchRenderer {
        fn render(&self, pattern: &Pattern) -> stitchpattern::Result<RgbaImage> {
            let [r, g, b] = pattern.colors().first().map_or([0, 0, 0], |c| c.rgb());
            Ok(RgbaImage::from_pixel(1, 1, Rgba([r, g, b, 255])))
        }
    }

    fn finished_pattern() -> Pattern {
        let mut pattern = Pattern::with_seed(4);
        pattern.add_color_rgb(10, 200, 30, "green");
        pattern.add_stitch_abs(0, 0, StitchFlags::NORMAL, false);
        pattern.add_stitch_abs(8, 5, StitchFlags::NORMAL, false);
        pattern.add_stitch_abs(8, 5, StitchFlags::END, false);
        pattern
    }

    // Tests PNG file creation with the raster renderer
    // Verified by disabling file save operation
    #[test]
    fn test_export_pattern_as_png_creates_file() -> stitchpattern::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("previews").join("pattern.png");

        export_pattern_as_png(&finished_pattern(), &RasterRenderer::default(), &path)?;
        assert!(path.exists(), "PNG file should be created");

        let saved = image::open(&path)?.to_rgba8();
        assert_eq!(saved.dimensions(), (17, 14));
        Ok(())
    }

    // Any renderer can be plugged into the export
    // Verified by ignoring the renderer argument
    #[test]
    fn test_export_with_custom_renderer() -> stitchpattern::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("swatch.png");

        export_pattern_as_png(&finished_pattern(), &SwatchRenderer, &path)?;
        let saved = image::open(&path)?.to_rgba8();
        assert_eq!(saved.get_pixel(0, 0), &Rgba([10, 200, 30, 255]));
        Ok(())
    }

    // Unknown extensions fail with an export error
    // Verified by mapping save errors to Ok
    #[test]
    fn test_export_png_unsupported_extension() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let image = RgbaImage::new(2, 2);
        let result = export_png(&image, &dir.path().join("pattern.unknown"));
        assert!(result.is_err(), "Should fail for an unknown image format");
    }

    // Empty patterns are not exported
    // Verified by writing a fallback image for empty patterns
    #[test]
    fn test_export_empty_pattern_error() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("empty.png");
        let result = export_pattern_as_png(&Pattern::with_seed(4), &RasterRenderer::default(), &path);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
