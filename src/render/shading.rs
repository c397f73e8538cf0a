//! Hex formatting and shading used to give strokes a twisted-thread look

use crate::io::configuration::GRADIENT_STOPS;
use crate::pattern::Color;

impl Color {
    /// Format as `#rrggbb` with lower-case, zero-padded channels
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Lighten (positive) or darken (negative) every channel by a percentage of 255
///
/// Channels saturate at 0 and 255.
pub fn shade(rgb: [u8; 3], percent: i32) -> [u8; 3] {
    let amount = (2.55 * f64::from(percent)).round() as i32;
    rgb.map(|channel| (i32::from(channel) + amount).clamp(0, 255) as u8)
}

/// Color of the thread gradient at `position` along a stroke
///
/// Dark at both ends, bright in the middle. `position` is clamped to `[0, 1]`
/// and the shades between stops are interpolated linearly per channel.
pub fn thread_gradient(rgb: [u8; 3], position: f64) -> [u8; 3] {
    let position = position.clamp(0.0, 1.0);

    for window in GRADIENT_STOPS.windows(2) {
        if let [(start, start_shade), (end, end_shade)] = window {
            if position <= *end {
                let span = end - start;
                let t = if span > 0.0 {
                    (position - start) / span
                } else {
                    1.0
                };
                return lerp(shade(rgb, *start_shade), shade(rgb, *end_shade), t);
            }
        }
    }

    GRADIENT_STOPS
        .last()
        .map_or(rgb, |(_, last_shade)| shade(rgb, *last_shade))
}

fn lerp(from: [u8; 3], to: [u8; 3], t: f64) -> [u8; 3] {
    let mut out = [0u8; 3];
    for ((channel, a), b) in out.iter_mut().zip(from).zip(to) {
        let value = (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a));
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    out
}
