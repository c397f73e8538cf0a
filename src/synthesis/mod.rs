//! Demonstration pattern generators

/// Seeded random-walk stitch generator
pub mod walk;

pub use walk::RandomWalk;
