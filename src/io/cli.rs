//! Command-line interface for solving and generating tile puzzles

use crate::algorithm::executor::{AlgorithmConfig, JigsawExecutor, Reassembly};
use crate::analysis::patterns::Pattern;
use crate::io::configuration::{
    DEFAULT_DENSITY, DEFAULT_SEED, DEFAULT_TILE_SIDE, HIGHLIGHT_PIXEL,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::image::export_image_as_png;
use crate::io::parser::{format_tiles, load_tiles};
use crate::spatial::assembly::PixelSource;
use crate::spatial::generator::PuzzleGenerator;
use clap::Parser;
use log::{LevelFilter, info};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tilejigsaw")]
#[command(
    author,
    version,
    about = "Reassemble shuffled image tiles and measure sea monster roughness"
)]
/// Command-line arguments for the reassembly tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file with `Tile <id>:` blocks
    #[arg(value_name = "TARGET", required_unless_present = "generate")]
    pub target: Option<PathBuf>,

    /// Suppress the search progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Pattern file to search for instead of the sea monster
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Mark pixels covered by the pattern in the printed image
    #[arg(long)]
    pub highlight: bool,

    /// Export the assembled image as a PNG file
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Enumerate layouts, report their count after the roughness and warn
    /// when the puzzle is ambiguous
    #[arg(long)]
    pub check_unique: bool,

    /// Print a generated puzzle with SIDE x SIDE tiles instead of solving
    #[arg(long, value_name = "SIDE")]
    pub generate: Option<usize>,

    /// Side of generated tiles
    #[arg(long, default_value_t = DEFAULT_TILE_SIDE)]
    pub tile_side: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fraction of set interior pixels in generated puzzles
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,
}

impl Cli {
    /// Check if the progress spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flag
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Runs one CLI invocation and writes the report
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against standard output
    ///
    /// # Errors
    ///
    /// Returns an error if loading, solving, scanning or export fails
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Run and write the report to `out`
    ///
    /// The report is the top-left tile id, the corner id product, the
    /// assembled image one row per line and finally the roughness.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, solving, scanning, writing or export
    /// fails. Lines already written stay written when the pattern is missing,
    /// and the layout count from `--check-unique` is still reported.
    pub fn process_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(board_side) = self.cli.generate {
            return self.generate_to(board_side, out);
        }

        let target = self.cli.target.as_deref().ok_or_else(|| {
            invalid_parameter("target", &"<none>", &"a puzzle file is required")
        })?;
        let store = load_tiles(target)?;
        info!("Loaded {} tiles from {}", store.len(), target.display());

        let config = AlgorithmConfig {
            pattern: self.load_pattern()?,
            check_uniqueness: self.cli.check_unique,
            show_progress: self.cli.should_show_progress(),
        };
        let pattern = config.pattern.clone();
        let reassembly = JigsawExecutor::new(&store, config).run()?;

        let highlights = Self::highlighted_pixels(&pattern, &reassembly);
        if let Some(png_path) = &self.cli.png {
            export_image_as_png(&reassembly.image, &highlights, png_path)?;
            info!("Wrote assembled image to {}", png_path.display());
        }

        writeln!(out, "{}", reassembly.top_left)?;
        writeln!(out, "{}", reassembly.corner_product)?;
        for (y, line) in reassembly.image.render().into_iter().enumerate() {
            if self.cli.highlight {
                let marked: String = line
                    .chars()
                    .enumerate()
                    .map(|(x, glyph)| {
                        if highlights.contains(&(x, y)) {
                            HIGHLIGHT_PIXEL
                        } else {
                            glyph
                        }
                    })
                    .collect();
                writeln!(out, "{marked}")?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        let roughness = reassembly.roughness();
        if let Ok(value) = &roughness {
            writeln!(out, "{value}")?;
        }
        if let Some(count) = reassembly.solution_count {
            writeln!(out, "{count}")?;
        }
        roughness.map(|_| ())
    }

    fn generate_to<W: Write>(&self, board_side: usize, out: &mut W) -> Result<()> {
        let puzzle = PuzzleGenerator::new(board_side, self.cli.tile_side, self.cli.seed)
            .with_density(self.cli.density)
            .generate()?;
        info!(
            "Generated {} tiles with seed {}",
            puzzle.store.len(),
            self.cli.seed
        );
        write!(out, "{}", format_tiles(&puzzle.store))?;
        Ok(())
    }

    fn load_pattern(&self) -> Result<Pattern> {
        self.cli
            .pattern
            .as_deref()
            .map_or_else(|| Ok(Pattern::sea_monster()), Self::read_pattern)
    }

    fn read_pattern(path: &Path) -> Result<Pattern> {
        std::fs::read_to_string(path)
            .map_err(|e| PuzzleError::FileSystem {
                path: path.to_path_buf(),
                operation: "read pattern",
                source: e,
            })?
            .parse()
    }

    /// Pattern pixels in canonical image coordinates
    ///
    /// Occurrences are found in the scan's orientation, so each covered
    /// pixel is mapped back through that orientation's remap.
    fn highlighted_pixels(
        pattern: &Pattern,
        reassembly: &Reassembly,
    ) -> BTreeSet<(usize, usize)> {
        let Some(scan) = &reassembly.scan else {
            return BTreeSet::new();
        };
        let size = reassembly.image.size();
        pattern
            .covered_pixels(&scan.anchors)
            .into_iter()
            .map(|(x, y)| scan.orientation.remap(x, y, size))
            .collect()
    }
}
