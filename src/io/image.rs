//! PNG export of rendered patterns

use std::path::Path;

use image::RgbaImage;

use crate::io::error::{PatternError, Result, ensure_parent_dir};
use crate::pattern::Pattern;
use crate::render::Renderer;

/// Save a rendered image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    image
        .save(output_path)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.into(),
            source: e,
        })
}

/// Render a pattern with any renderer and save the result as PNG
///
/// # Errors
///
/// Returns an error if rendering fails or the image cannot be saved
pub fn export_pattern_as_png(
    pattern: &Pattern,
    renderer: &impl Renderer,
    output_path: &Path,
) -> Result<()> {
    let image = renderer.render(pattern)?;
    export_png(&image, output_path)
}
