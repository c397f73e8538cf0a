//! Palette reconciliation against the colors the stitch stream actually uses

use log::debug;
use rand::Rng;

use crate::io::configuration::RANDOM_COLOR_DESCRIPTION;
use crate::pattern::builder::Pattern;
use crate::pattern::color::Color;

impl Pattern {
    /// Append a color with uniformly random channels labelled `"random"`
    pub fn add_color_random(&mut self) {
        let color = Color::new(
            self.rng.random(),
            self.rng.random(),
            self.rng.random(),
            RANDOM_COLOR_DESCRIPTION,
        );
        self.add_color(color);
    }

    /// Highest palette index referenced by any stitch (0 without stitches)
    pub fn max_color_index(&self) -> usize {
        self.stitches
            .iter()
            .map(|stitch| stitch.color)
            .max()
            .unwrap_or(0)
    }

    /// Resize the palette to exactly cover the color indices in use
    ///
    /// Missing entries are synthesized with [`Self::add_color_random`]; entries past
    /// the highest referenced index are discarded. Afterwards the palette holds
    /// `max_color_index() + 1` colors, so an empty pattern keeps exactly one.
    pub fn fix_color_count(&mut self) {
        let max_color_index = self.max_color_index();

        let mut synthesized = 0usize;
        while self.colors.len() <= max_color_index {
            self.add_color_random();
            synthesized += 1;
        }

        let discarded = self.colors.len() - (max_color_index + 1);
        self.colors.truncate(max_color_index + 1);

        if synthesized > 0 || discarded > 0 {
            debug!(
                "Palette reconciled to {} colors ({synthesized} synthesized, {discarded} discarded)",
                self.colors.len()
            );
        }
    }
}
