//! Random-walk patterns built exclusively through the relative append API
//!
//! The walk behaves like a decoded machine stream: short normal stitches,
//! occasional long jumps that may be followed by a trim, evenly spaced color
//! stops and a closing end marker. One palette entry is deliberately left
//! undeclared so the end marker's reconciliation has to synthesize it.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    DEFAULT_COLOR_COUNT, DEFAULT_JUMP_PROBABILITY, DEFAULT_MAX_STEP, DEFAULT_STITCH_COUNT,
    DEFAULT_TRIM_PROBABILITY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::pattern::{Pattern, StitchFlags};

// Jumps travel this many times further than a normal stitch
const JUMP_REACH: i32 = 4;

/// Parameters of a random-walk pattern
#[derive(Debug, Clone)]
pub struct RandomWalk {
    /// Steps taken, not counting stops, trims and the end marker
    pub stitch_count: usize,
    /// Thread colors used; color stops are spread evenly over the steps
    pub color_count: usize,
    /// Longest displacement of a normal stitch on either axis
    pub max_step: i32,
    /// Chance that a step is a jump instead of a stitch
    pub jump_probability: f64,
    /// Chance that a jump is followed by a trim
    pub trim_probability: f64,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self {
            stitch_count: DEFAULT_STITCH_COUNT,
            color_count: DEFAULT_COLOR_COUNT,
            max_step: DEFAULT_MAX_STEP,
            jump_probability: DEFAULT_JUMP_PROBABILITY,
            trim_probability: DEFAULT_TRIM_PROBABILITY,
        }
    }
}

impl RandomWalk {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid parameter
    pub fn validate(&self) -> Result<()> {
        if self.stitch_count == 0 {
            return Err(invalid_parameter(
                "stitch_count",
                &self.stitch_count,
                &"must be at least 1",
            ));
        }
        if self.color_count == 0 {
            return Err(invalid_parameter(
                "color_count",
                &self.color_count,
                &"must be at least 1",
            ));
        }
        if self.color_count > self.stitch_count {
            return Err(invalid_parameter(
                "color_count",
                &self.color_count,
                &"cannot exceed the stitch count",
            ));
        }
        if self.max_step <= 0 {
            return Err(invalid_parameter(
                "max_step",
                &self.max_step,
                &"must be positive",
            ));
        }
        if self.max_step > i32::MAX / JUMP_REACH {
            return Err(invalid_parameter(
                "max_step",
                &self.max_step,
                &format!("must not exceed {}", i32::MAX / JUMP_REACH),
            ));
        }
        for (parameter, value) in [
            ("jump_probability", self.jump_probability),
            ("trim_probability", self.trim_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(parameter, &value, &"must be within [0, 1]"));
            }
        }
        Ok(())
    }

    /// Generate a finished pattern; the same seed always yields the same pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail [`Self::validate`]
    pub fn generate(&self, seed: u64) -> Result<Pattern> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut pattern = Pattern::with_seed(rng.random());

        for thread in 1..self.color_count {
            pattern.add_color_rgb(
                rng.random(),
                rng.random(),
                rng.random(),
                format!("thread {thread}"),
            );
        }

        let reach = self.max_step.saturating_mul(JUMP_REACH);

        pattern.add_stitch_rel(0, 0, StitchFlags::NORMAL, false);
        for step in 1..self.stitch_count {
            // Color k starts at step k * stitch_count / color_count
            if step * self.color_count / self.stitch_count > pattern.current_color_index() {
                pattern.add_stitch_rel(0, 0, StitchFlags::STOP, true);
            }

            if rng.random_bool(self.jump_probability) {
                let dx = rng.random_range(-reach..=reach);
                let dy = rng.random_range(-reach..=reach);
                pattern.add_stitch_rel(dx, dy, StitchFlags::JUMP, false);
                if rng.random_bool(self.trim_probability) {
                    pattern.add_stitch_rel(0, 0, StitchFlags::TRIM, false);
                }
            } else {
                let dx = rng.random_range(-self.max_step..=self.max_step);
                let dy = rng.random_range(-self.max_step..=self.max_step);
                pattern.add_stitch_rel(dx, dy, StitchFlags::NORMAL, false);
            }
        }
        pattern.add_stitch_rel(0, 0, StitchFlags::END, false);

        debug!(
            "Generated walk with seed {seed}: {} stitches, {} colors",
            pattern.len(),
            pattern.colors().len()
        );

        Ok(pattern)
    }
}
