//! Pattern constants and runtime configuration defaults

/// Description given to synthesized palette entries
pub const RANDOM_COLOR_DESCRIPTION: &str = "random";

// Renderer settings
/// Brush width in pixels for sewn strokes
pub const DEFAULT_LINE_WIDTH: u32 = 3;
/// Pixels per pattern unit
pub const DEFAULT_SCALE: u32 = 1;
/// Empty border around the rendered extent, in pixels
pub const DEFAULT_MARGIN: u32 = 4;
/// Background of rendered previews (transparent)
pub const DEFAULT_BACKGROUND: [u8; 4] = [0, 0, 0, 0];

// Thread gradient: brightness offsets at positions along a stroke
/// Shade percentage at the stroke ends
pub const GRADIENT_EDGE_SHADE: i32 = -60;
/// Shade percentage at the stroke middle
pub const GRADIENT_HIGHLIGHT_SHADE: i32 = 60;
/// Gradient stops as (position, shade percent)
pub const GRADIENT_STOPS: [(f64, i32); 5] = [
    (0.0, GRADIENT_EDGE_SHADE),
    (0.05, 0),
    (0.5, GRADIENT_HIGHLIGHT_SHADE),
    (0.9, 0),
    (1.0, GRADIENT_EDGE_SHADE),
];
/// Gradient radius relative to the stroke length
pub const GRADIENT_RADIUS_FACTOR: f64 = 1.4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed rendered image dimension
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of patterns generated per run
pub const DEFAULT_PATTERN_COUNT: usize = 1;
/// Default number of stitches in a generated pattern
pub const DEFAULT_STITCH_COUNT: usize = 2_000;
/// Default number of thread colors in a generated pattern
pub const DEFAULT_COLOR_COUNT: usize = 4;
/// Default longest stitch in pattern units
pub const DEFAULT_MAX_STEP: i32 = 12;
/// Default chance that a step is a jump
pub const DEFAULT_JUMP_PROBABILITY: f64 = 0.02;
/// Default chance that a jump is followed by a trim
pub const DEFAULT_TRIM_PROBABILITY: f64 = 0.5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix of generated file names
pub const OUTPUT_PREFIX: &str = "pattern_";
/// Stitches drawn between consecutive animation frames
pub const DEFAULT_STITCHES_PER_FRAME: usize = 20;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// How much longer the last frame stays on screen
pub const FINAL_FRAME_HOLD: u32 = 25;
