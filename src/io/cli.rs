//! Command-line interface for batch processing PNG samples

use crate::algorithm::executor::{Generator, GeneratorConfig};
use crate::algorithm::selection::{ContradictionPolicy, SelectionStrategy};
use crate::analysis::rules::AdjacencyRules;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_SUFFIX, PROGRESS_REFRESH_STEPS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_canvas_as_png, load_sample};
use crate::io::prefill::PrefillData;
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pixel-collapse")]
#[command(
    author,
    version,
    about = "Synthesize images that locally resemble a sample using pixel wave collapse"
)]
/// Command-line arguments for the image synthesis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Draw colors proportionally to their frequency in the sample
    #[arg(long)]
    pub weighted: bool,

    /// Reaction when a pixel has no legal color left
    #[arg(long, value_enum, default_value_t = ContradictionPolicy::Abort)]
    pub on_contradiction: ContradictionPolicy,

    /// Stop after this many collapse steps
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Suppress progress output and all logging below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Use prefill image if available (looks for <input>_pre.png)
    #[arg(short, long)]
    pub prefill: bool,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation settings derived from the flags
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            strategy: if self.weighted {
                SelectionStrategy::FrequencyWeighted
            } else {
                SelectionStrategy::Uniform
            },
            contradiction_policy: self.on_contradiction,
            max_steps: self.max_steps,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.generator_config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Sample files selected by the target argument, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a readable
    /// directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !Self::is_png(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if Self::is_png(&path) && !Self::is_derived(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn is_png(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some("png")
    }

    // Outputs and prefill images sitting next to samples are not samples
    fn is_derived(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with("_pre"))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);
        let config = self.cli.generator_config();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, config.bounds().area());
        }

        let sample = load_sample(input_path)?;
        let rules = AdjacencyRules::build(&sample)?;
        let mut generator = Generator::new(&rules, config)?;

        if self.cli.prefill {
            let prefill_path = Self::get_prefill_path(input_path);
            if prefill_path.exists() {
                let prefill_data = PrefillData::from_png(&prefill_path, &rules)?;
                generator.apply_prefill(prefill_data.iter())?;
            } else {
                warn!(
                    "No prefill found at: {} (continuing without prefill)",
                    prefill_path.display()
                );
            }
        }

        while generator.execute_step()? {
            if generator.iteration % PROGRESS_REFRESH_STEPS == 0
                && let Some(ref mut pm) = self.progress_manager
            {
                pm.update_collapsed(index, generator.canvas().collapsed_count());
            }
        }

        let canvas = generator.run()?;
        export_canvas_as_png(&canvas, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        info!(
            "Generated {} from {} ({} colors) in {:.2?}",
            output_path.display(),
            input_path.display(),
            rules.palette().len(),
            start_time.elapsed()
        );

        Ok(())
    }

    /// Path of the prefill image that accompanies `input_path`
    pub fn get_prefill_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, "_pre")
    }

    /// Path the generated image for `input_path` is written to
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, OUTPUT_SUFFIX)
    }

    fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
