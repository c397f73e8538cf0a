//! Pattern data model
//!
//! This module contains the pattern core:
//! - Leaf value types for stitches and thread colors
//! - The append-only pattern builder
//! - Bounding-box geometry and coordinate transforms
//! - Palette reconciliation against the stitch stream

/// Append-only pattern state and stitch/color mutation
pub mod builder;
/// Thread color value type
pub mod color;
/// Bounding box computation, normalization and vertical inversion
pub mod geometry;
/// Random palette entries and color-count reconciliation
pub mod palette;
/// Stitch value type and motion flags
pub mod stitch;

pub use builder::Pattern;
pub use color::Color;
pub use geometry::BoundingBox;
pub use stitch::{ColorIndex, Stitch, StitchFlags};
