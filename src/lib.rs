//! Embroidery stitch pattern model with derived geometry and palette reconciliation
//!
//! A [`Pattern`] is an append-only sequence of needle positions, each flagged with
//! its motion semantics and tagged with an index into the thread palette. The
//! pattern computes its own bounding box, normalizes and flips its coordinates,
//! and keeps the palette size consistent with the color indices its stitches use.
//! Rendering lives in a separate, swappable layer that only reads finished patterns.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Stitch, color and pattern data model with geometry and palette operations
pub mod pattern;
/// Stroke extraction, shading and raster previews of finished patterns
pub mod render;
/// Seeded generators that build demonstration patterns
pub mod synthesis;

pub use io::error::{PatternError, Result};
pub use pattern::{BoundingBox, Color, ColorIndex, Pattern, Stitch, StitchFlags};
