//! Raster previews of finished patterns

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_LINE_WIDTH, DEFAULT_MARGIN, DEFAULT_SCALE, GRADIENT_RADIUS_FACTOR,
    MAX_IMAGE_DIMENSION,
};
use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::pattern::{BoundingBox, Pattern};
use crate::render::shading::thread_gradient;
use crate::render::strokes::{Stroke, strokes};

/// Anything that turns a finished pattern into an image
///
/// Implementations only read the pattern, so one pattern can be handed to
/// several renderers.
pub trait Renderer {
    /// Render the pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot be drawn
    fn render(&self, pattern: &Pattern) -> Result<RgbaImage>;
}

/// Draws sewn strokes onto an RGBA canvas sized from the pattern's bounding box
///
/// The pattern's stored bounding box is used as is; stitches outside it are
/// clipped, so patterns should be finalized before rendering.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    /// Pixels per pattern unit
    pub scale: u32,
    /// Brush width in pixels
    pub line_width: u32,
    /// Empty border in pixels on every side
    pub margin: u32,
    /// Canvas fill color
    pub background: [u8; 4],
    /// Apply the thread gradient along each stroke instead of a flat color
    pub shaded: bool,
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            line_width: DEFAULT_LINE_WIDTH,
            margin: DEFAULT_MARGIN,
            background: DEFAULT_BACKGROUND,
            shaded: true,
        }
    }
}

impl Renderer for RasterRenderer {
    fn render(&self, pattern: &Pattern) -> Result<RgbaImage> {
        let strokes = strokes(pattern)?;
        let bounds = pattern.bounds();
        let mut canvas = self.blank_canvas(pattern)?;
        self.draw_strokes(&mut canvas, bounds, &strokes);
        Ok(canvas)
    }
}

impl RasterRenderer {
    /// Canvas dimensions `(width, height)` for a bounding box
    ///
    /// # Errors
    ///
    /// Returns an error if the box is inverted, the scale is zero, or the image
    /// would exceed `MAX_IMAGE_DIMENSION` on either side
    pub fn canvas_size(&self, bounds: BoundingBox) -> Result<(u32, u32)> {
        if bounds.is_inverted() {
            return Err(PatternError::EmptyPattern);
        }
        if self.scale == 0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be at least 1",
            ));
        }
        Ok((self.extent(bounds.width())?, self.extent(bounds.height())?))
    }

    fn extent(&self, span: i32) -> Result<u32> {
        let units = u32::try_from(span)
            .ok()
            .and_then(|span| span.checked_add(1))
            .ok_or(PatternError::EmptyPattern)?;
        units
            .checked_mul(self.scale)
            .and_then(|pixels| pixels.checked_add(self.margin.saturating_mul(2)))
            .filter(|&pixels| pixels <= MAX_IMAGE_DIMENSION)
            .ok_or_else(|| {
                invalid_parameter(
                    "scale",
                    &self.scale,
                    &format!("image would exceed {MAX_IMAGE_DIMENSION} pixels"),
                )
            })
    }

    /// Empty canvas covering the pattern's bounding box
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyPattern`] for a pattern without stitches or with
    /// only trims, or the errors of [`Self::canvas_size`]
    pub fn blank_canvas(&self, pattern: &Pattern) -> Result<RgbaImage> {
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        let (width, height) = self.canvas_size(pattern.bounds())?;
        Ok(RgbaImage::from_pixel(width, height, Rgba(self.background)))
    }

    /// Draw a run of strokes; hidden strokes are skipped
    pub fn draw_strokes(&self, canvas: &mut RgbaImage, bounds: BoundingBox, strokes: &[Stroke]) {
        for stroke in strokes.iter().filter(|stroke| stroke.visible) {
            self.draw_stroke(canvas, bounds, stroke);
        }
    }

    // Stamps a square brush at every pixel step along the part of the segment
    // that can reach the canvas
    fn draw_stroke(&self, canvas: &mut RgbaImage, bounds: BoundingBox, stroke: &Stroke) {
        let [x0, y0] = self.to_pixel(bounds, stroke.from);
        let [x1, y1] = self.to_pixel(bounds, stroke.to);
        let reach = f64::from(self.line_width.max(1));
        let window = [
            -reach,
            -reach,
            f64::from(canvas.width()) + reach,
            f64::from(canvas.height()) + reach,
        ];
        let Some((enter, exit)) = clip_segment([x0, y0], [x1, y1], window) else {
            return;
        };

        let length = (x1 - x0).hypot(y1 - y0) * (exit - enter);
        let steps = length.ceil().max(1.0) as u32;

        for step in 0..=steps {
            let t = (exit - enter).mul_add(f64::from(step) / f64::from(steps), enter);
            let color = if self.shaded {
                thread_gradient(stroke.color, t / GRADIENT_RADIUS_FACTOR)
            } else {
                stroke.color
            };
            let [r, g, b] = color;
            let x = (x1 - x0).mul_add(t, x0).round() as i64;
            let y = (y1 - y0).mul_add(t, y0).round() as i64;
            self.stamp(canvas, x, y, Rgba([r, g, b, 255]));
        }
    }

    fn stamp(&self, canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
        let width = i64::from(self.line_width.max(1));
        let half = width / 2;
        for dy in 0..width {
            for dx in 0..width {
                let (Ok(px), Ok(py)) = (u32::try_from(x + dx - half), u32::try_from(y + dy - half))
                else {
                    continue;
                };
                if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
                    *pixel = color;
                }
            }
        }
    }

    // Pixel center of a pattern position relative to the bounding box origin
    fn to_pixel(&self, bounds: BoundingBox, position: [i32; 2]) -> [f64; 2] {
        let scale = f64::from(self.scale);
        let offset = f64::from(self.margin.saturating_add(self.scale / 2));
        [
            (f64::from(position[0]) - f64::from(bounds.left)).mul_add(scale, offset),
            (f64::from(position[1]) - f64::from(bounds.top)).mul_add(scale, offset),
        ]
    }
}

/// Parameter range `(enter, exit)` within `0..=1` of the segment `from -> to`
/// that lies inside `window = [min_x, min_y, max_x, max_y]`, if any
///
/// Liang-Barsky clipping against the four window edges.
pub fn clip_segment(from: [f64; 2], to: [f64; 2], window: [f64; 4]) -> Option<(f64, f64)> {
    let [x0, y0] = from;
    let [min_x, min_y, max_x, max_y] = window;
    let (dx, dy) = (to[0] - x0, to[1] - y0);
    let edges = [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ];

    let mut enter = 0.0_f64;
    let mut exit = 1.0_f64;
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                enter = enter.max(r);
            } else {
                exit = exit.min(r);
            }
        }
    }

    (enter <= exit).then_some((enter, exit))
}
