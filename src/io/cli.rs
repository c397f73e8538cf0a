//! Command-line interface for batch generation of stitch pattern previews

use crate::io::configuration::{
    DEFAULT_COLOR_COUNT, DEFAULT_PATTERN_COUNT, DEFAULT_SCALE, DEFAULT_SEED,
    DEFAULT_STITCH_COUNT, OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_pattern_as_png;
use crate::io::progress::ProgressManager;
use crate::pattern::Pattern;
use crate::render::RasterRenderer;
use crate::render::animation::StitchOutAnimation;
use crate::synthesis::RandomWalk;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stitchpattern")]
#[command(
    author,
    version,
    about = "Generate random-walk embroidery patterns and render stitch previews"
)]
/// Command-line arguments for the pattern generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the rendered previews
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Random seed of the first pattern; later patterns use the following seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of patterns to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_PATTERN_COUNT)]
    pub count: usize,

    /// Steps per pattern
    #[arg(short = 't', long, default_value_t = DEFAULT_STITCH_COUNT)]
    pub stitches: usize,

    /// Thread colors per pattern
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Pixels per pattern unit
    #[arg(short = 'x', long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Mirror patterns vertically before rendering
    #[arg(short, long)]
    pub flip: bool,

    /// Draw flat thread colors instead of the shaded thread gradient
    #[arg(long)]
    pub flat: bool,

    /// Also export a stitch-out animation as GIF
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate patterns even if their preview exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing previews should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seeds of every requested pattern
    pub fn seeds(&self) -> Vec<u64> {
        (0..self.count as u64)
            .map(|offset| self.seed.wrapping_add(offset))
            .collect()
    }

    /// Walk parameters derived from the arguments
    pub fn walk(&self) -> RandomWalk {
        RandomWalk {
            stitch_count: self.stitches,
            color_count: self.colors,
            ..RandomWalk::default()
        }
    }

    /// Renderer configured from the arguments
    pub fn renderer(&self) -> RasterRenderer {
        RasterRenderer {
            scale: self.scale,
            shaded: !self.flat,
            ..RasterRenderer::default()
        }
    }
}

/// Orchestrates batch generation of patterns with progress tracking
pub struct PatternProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PatternProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, finalize and render every requested pattern
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation, rendering or export fails
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;
        let seeds = self.collect_seeds();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let result = seeds
            .iter()
            .enumerate()
            .try_for_each(|(index, &seed)| self.process_pattern(seed, index));

        // Bars are cleared on failure too
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    /// Progress display, absent in quiet mode
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn validate(&self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must be at least 1",
            ));
        }
        if self.cli.scale == 0 {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &"must be at least 1",
            ));
        }
        if self.cli.output.is_file() {
            return Err(invalid_parameter(
                "output",
                &self.cli.output.display(),
                &"must be a directory",
            ));
        }
        self.cli.walk().validate()
    }

    /// Seeds whose preview still has to be produced
    pub fn collect_seeds(&self) -> Vec<u64> {
        self.cli
            .seeds()
            .into_iter()
            .filter(|&seed| self.should_process_seed(seed))
            .collect()
    }

    fn should_process_seed(&self, seed: u64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.get_output_path(seed);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_pattern(&mut self, seed: u64, index: usize) -> Result<()> {
        let output_path = self.get_output_path(seed);
        let name = format!("{OUTPUT_PREFIX}{seed}");

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_pattern(index, &name);
        }
        let mut pattern = self.cli.walk().generate(seed)?;

        self.enter_phase(index, "finalize");
        self.finalize(&mut pattern);

        self.enter_phase(index, "render");
        let renderer = self.cli.renderer();
        export_pattern_as_png(&pattern, &renderer, &output_path)?;
        info!("Wrote {}", output_path.display());

        if self.cli.animate {
            self.enter_phase(index, "animate");
            let animation = StitchOutAnimation {
                renderer,
                ..StitchOutAnimation::default()
            };
            let gif_path = self.get_animation_path(seed);
            animation.export_gif(&pattern, &gif_path)?;
            info!("Wrote {}", gif_path.display());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_pattern(index);
        }

        Ok(())
    }

    /// Bring a generated pattern into image space
    ///
    /// The walk already ends with an end marker, which computed the bounding box
    /// and reconciled the palette; only the optional flip and the translation to
    /// the origin remain.
    pub fn finalize(&self, pattern: &mut Pattern) {
        if !pattern.is_finalized() {
            pattern.calculate_bounding_box();
            pattern.fix_color_count();
        }
        if self.cli.flip {
            pattern.invert_pattern_vertical();
        }
        pattern.move_to_positive();
    }

    fn enter_phase(&mut self, index: usize, phase: &'static str) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_phase(index, phase);
        }
    }

    /// Preview path for a seed
    pub fn get_output_path(&self, seed: u64) -> PathBuf {
        Self::output_file(&self.cli.output, seed, "png")
    }

    /// Animation path for a seed
    pub fn get_animation_path(&self, seed: u64) -> PathBuf {
        Self::output_file(&self.cli.output, seed, "gif")
    }

    fn output_file(dir: &Path, seed: u64, extension: &str) -> PathBuf {
        dir.join(format!("{OUTPUT_PREFIX}{seed}.{extension}"))
    }
}
