//! Generation configuration and the step loop that drives a canvas

use log::{debug, warn};

use crate::algorithm::propagation::Canvas;
use crate::algorithm::selection::{ContradictionPolicy, SelectionStrategy};
use crate::analysis::palette::Color;
use crate::analysis::rules::AdjacencyRules;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter, invalid_source};
use crate::spatial::direction::Point;
use crate::spatial::grid::BoundingBox;

/// Generation parameters controlling canvas size and color selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Seed for every random choice made during generation
    pub seed: u64,
    /// How colors are drawn among unrestricted candidates
    pub strategy: SelectionStrategy,
    /// Reaction to a pixel with no legal color
    pub contradiction_policy: ContradictionPolicy,
    /// Optional cap on worklist steps after seeding
    pub max_steps: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            strategy: SelectionStrategy::default(),
            contradiction_policy: ContradictionPolicy::default(),
            max_steps: None,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for a `width` x `height` canvas
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check the dimensions are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }

    /// Target rectangle for these dimensions
    pub const fn bounds(&self) -> BoundingBox {
        BoundingBox::from_size(self.width, self.height)
    }
}

/// Drives a canvas from a single seed until its worklist drains
///
/// Generation is synchronous and single-threaded. `execute_step` exposes the
/// loop one collapse at a time so callers can report progress or impose
/// their own deadlines.
#[derive(Debug, Clone)]
pub struct Generator<'r> {
    canvas: Canvas<'r>,
    config: GeneratorConfig,
    /// Worklist steps taken since seeding
    pub iteration: usize,
    seeded: bool,
}

impl<'r> Generator<'r> {
    /// Create a generator with an empty canvas
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration has invalid dimensions
    /// - The rule table holds no colors to draw from
    pub fn new(rules: &'r AdjacencyRules, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        if rules.total_observations() == 0 {
            return Err(invalid_source(&"rule table contains no colors"));
        }

        let canvas = Canvas::new(rules, config.bounds(), config.seed)
            .with_strategy(config.strategy)
            .with_policy(config.contradiction_policy);

        Ok(Self {
            canvas,
            config,
            iteration: 0,
            seeded: false,
        })
    }

    /// Pin predetermined colors before generation starts
    ///
    /// Placements outside the canvas are skipped. Returns how many pixels
    /// were pinned. Pinned pixels take the place of the random seed.
    ///
    /// # Errors
    ///
    /// Returns `UnknownColor` if a placement uses a color absent from the rules
    pub fn apply_prefill(
        &mut self,
        placements: impl IntoIterator<Item = (Point, Color)>,
    ) -> Result<usize> {
        let mut pinned = 0;
        for (point, color) in placements {
            if self.canvas.assign(point, color)? {
                pinned += 1;
            }
        }
        if pinned > 0 {
            self.seeded = true;
        }
        debug!("Prefill pinned {pinned} pixels");
        Ok(pinned)
    }

    /// Collapse one random seed pixel, unless the canvas is already seeded
    ///
    /// Returns the seed coordinate when a seed was placed.
    ///
    /// # Errors
    ///
    /// Propagates any error from the seed collapse
    pub fn seed(&mut self) -> Result<Option<Point>> {
        if self.seeded {
            return Ok(None);
        }
        let point = self.canvas.create_random_seed_point();
        self.canvas.collapse(point)?;
        self.seeded = true;
        debug!("Seeded generation at ({}, {})", point[0], point[1]);
        Ok(Some(point))
    }

    /// Execute a single step, seeding first if needed
    ///
    /// Returns `Ok(false)` once the worklist is empty or the step cap is hit.
    ///
    /// # Errors
    ///
    /// Returns an error if a collapse fails (a contradiction under
    /// `ContradictionPolicy::Abort`, or an inconsistent rule table)
    pub fn execute_step(&mut self) -> Result<bool> {
        if !self.seeded {
            self.seed()?;
            return Ok(true);
        }

        if self.config.max_steps.is_some_and(|cap| self.iteration >= cap) {
            return Ok(false);
        }

        if self.canvas.step()?.is_none() {
            return Ok(false);
        }
        self.iteration += 1;
        Ok(true)
    }

    /// Run until the worklist drains and return the canvas
    ///
    /// When the step cap stops generation early the partially collapsed
    /// canvas is returned.
    ///
    /// # Errors
    ///
    /// Returns the first collapse error encountered
    pub fn run(mut self) -> Result<Canvas<'r>> {
        while self.execute_step()? {}

        if self.canvas.is_complete() {
            debug!(
                "Generated {}x{} canvas in {} steps",
                self.config.width, self.config.height, self.iteration
            );
        } else {
            warn!(
                "Generation stopped after {} steps with {} of {} pixels collapsed",
                self.iteration,
                self.canvas.collapsed_count(),
                self.canvas.bounds().area()
            );
        }

        Ok(self.canvas)
    }

    /// Access the canvas being generated
    pub const fn canvas(&self) -> &Canvas<'r> {
        &self.canvas
    }

    /// Access the configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Consume the generator, returning the canvas as it stands
    pub fn into_canvas(self) -> Canvas<'r> {
        self.canvas
    }
}

/// Generate a complete canvas with default options
///
/// # Errors
///
/// Returns an error for invalid dimensions, an empty rule table, or a
/// contradiction
pub fn generate(
    rules: &AdjacencyRules,
    width: usize,
    height: usize,
    seed: u64,
) -> Result<Canvas<'_>> {
    let config = GeneratorConfig {
        seed,
        ..GeneratorConfig::with_size(width, height)
    };
    Generator::new(rules, config)?.run()
}
