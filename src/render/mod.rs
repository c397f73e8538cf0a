//! Presentation layer for finished patterns
//!
//! Nothing here mutates a pattern. The renderer reads stitches, palette and
//! bounding box, interprets the motion flags and produces images:
//! - Stroke extraction with flag-based visibility
//! - Hex formatting and thread gradient shading
//! - Raster previews behind a swappable [`Renderer`] trait
//! - Stitch-out animations

/// Stitch-out GIF animation
pub mod animation;
/// Raster renderer and the renderer trait
pub mod raster;
/// Hex formatting and gradient shading of thread colors
pub mod shading;
/// Conversion of stitches into drawable strokes
pub mod strokes;

pub use raster::{RasterRenderer, Renderer};
pub use strokes::Stroke;
