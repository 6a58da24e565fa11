//! Sparse canvas and the collapse step that grows it
//!
//! Each collapse gathers restrictions from already collapsed neighbours,
//! draws one color among the remaining candidates, and queues the
//! neighbours that still need a color. Pixels move from uncollapsed to
//! collapsed exactly once.

use log::{trace, warn};

use crate::algorithm::colorset::ColorSet;
use crate::algorithm::queue::WorkQueue;
use crate::algorithm::selection::{ContradictionPolicy, RandomSelector, SelectionStrategy};
use crate::analysis::palette::Color;
use crate::analysis::rules::AdjacencyRules;
use crate::io::error::{AlgorithmError, Result, WithContext};
use crate::spatial::direction::{Point, neighbours};
use crate::spatial::grid::{BoundingBox, SparseGrid};
use crate::spatial::raster::ImageSink;

/// State of one canvas coordinate
#[derive(Debug, Clone)]
pub struct Pixel {
    color: Option<Color>,
    restricted: ColorSet,
}

impl Pixel {
    fn new(palette_len: usize) -> Self {
        Self {
            color: None,
            restricted: ColorSet::new(palette_len),
        }
    }

    /// Whether a color has been assigned
    pub const fn is_collapsed(&self) -> bool {
        self.color.is_some()
    }

    /// Assigned color, once collapsed
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Colors forbidden by collapsed neighbours at the time of collapse
    pub const fn restricted(&self) -> &ColorSet {
        &self.restricted
    }
}

/// Output canvas bound to a target rectangle and a rule table
///
/// The canvas is the only mutator of pixel state. Coordinates outside the
/// target rectangle are ignored everywhere.
#[derive(Debug, Clone)]
pub struct Canvas<'r> {
    rules: &'r AdjacencyRules,
    grid: SparseGrid<Pixel>,
    queue: WorkQueue<Point>,
    selector: RandomSelector,
    strategy: SelectionStrategy,
    policy: ContradictionPolicy,
    collapsed: usize,
    contradictions: usize,
}

impl<'r> Canvas<'r> {
    /// Empty canvas over `bounds`, drawing colors with a generator seeded by `seed`
    pub fn new(rules: &'r AdjacencyRules, bounds: BoundingBox, seed: u64) -> Self {
        Self {
            rules,
            grid: SparseGrid::new(bounds),
            queue: WorkQueue::new(),
            selector: RandomSelector::new(seed),
            strategy: SelectionStrategy::default(),
            policy: ContradictionPolicy::default(),
            collapsed: 0,
            contradictions: 0,
        }
    }

    /// Use `strategy` for every subsequent color draw
    #[must_use]
    pub const fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Use `policy` when a pixel has no legal color left
    #[must_use]
    pub const fn with_policy(mut self, policy: ContradictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Uniformly sample a coordinate inside the target rectangle
    pub fn create_random_seed_point(&mut self) -> Point {
        let BoundingBox { min, max } = *self.grid.bounds();
        let x = self.selector.range_inclusive(min[0], max[0]);
        let y = self.selector.range_inclusive(min[1], max[1]);
        [x, y]
    }

    /// Collapse the pixel at `point`
    ///
    /// Returns `Ok(false)` without touching anything when `point` is outside
    /// the target rectangle or already collapsed.
    ///
    /// # Errors
    ///
    /// - `NoColorAvailable` carrying `point` when every known color is
    ///   restricted and the policy is `Abort`
    /// - `UnknownColor` if a neighbour holds a color missing from the rules
    pub fn collapse(&mut self, point: Point) -> Result<bool> {
        if !self.grid.bounds().contains(point) || self.is_collapsed(point) {
            return Ok(false);
        }

        let neighbour_restrictions = self.neighbour_restrictions(point)?;
        let palette_len = self.rules.palette().len();
        let Some(pixel) = self
            .grid
            .get_or_insert_with(point, || Pixel::new(palette_len))
        else {
            return Ok(false);
        };
        pixel.restricted.union_with(&neighbour_restrictions);

        let drawn =
            self.rules
                .select_unrestricted_color(&pixel.restricted, &mut self.selector, self.strategy);
        let color = match drawn {
            Ok(color) => color,
            Err(AlgorithmError::NoColorAvailable {
                restricted, known, ..
            }) if self.policy == ContradictionPolicy::Unconstrained => {
                warn!(
                    "Contradiction at ({}, {}): {restricted} of {known} colors restricted, drawing unconstrained",
                    point[0], point[1]
                );
                self.contradictions += 1;
                self.rules
                    .select_unrestricted_color(
                        &ColorSet::new(palette_len),
                        &mut self.selector,
                        self.strategy,
                    )
                    .at_position(point)?
            }
            Err(error) => return Err(error).at_position(point),
        };

        pixel.color = Some(color);
        self.collapsed += 1;
        trace!("Collapsed ({}, {}) to {color}", point[0], point[1]);

        self.enqueue_neighbours(point);
        Ok(true)
    }

    /// Pin `color` at `point` without consulting neighbour restrictions
    ///
    /// Returns `Ok(false)` when `point` is outside the target rectangle or
    /// already collapsed.
    ///
    /// # Errors
    ///
    /// Returns `UnknownColor` if `color` does not appear in the rules
    pub fn assign(&mut self, point: Point, color: Color) -> Result<bool> {
        if self.rules.palette().id_of(color).is_none() {
            return Err(AlgorithmError::UnknownColor { color });
        }
        if !self.grid.bounds().contains(point) || self.is_collapsed(point) {
            return Ok(false);
        }

        let palette_len = self.rules.palette().len();
        if let Some(pixel) = self
            .grid
            .get_or_insert_with(point, || Pixel::new(palette_len))
        {
            pixel.color = Some(color);
            self.collapsed += 1;
            self.enqueue_neighbours(point);
            return Ok(true);
        }
        Ok(false)
    }

    /// Dequeue one pending coordinate and collapse it
    ///
    /// Returns the dequeued coordinate, or `None` once the worklist is empty.
    ///
    /// # Errors
    ///
    /// Propagates any error from `collapse`
    pub fn step(&mut self) -> Result<Option<Point>> {
        let Some(point) = self.queue.dequeue() else {
            return Ok(None);
        };
        self.collapse(point)?;
        Ok(Some(point))
    }

    // Restrictions contributed by collapsed neighbours, each reasoning from
    // its own position back towards `point`
    fn neighbour_restrictions(&self, point: Point) -> Result<ColorSet> {
        let mut restricted = self.rules.empty_set();

        for (direction, neighbour) in neighbours(point) {
            let Some(color) = self.grid.get(neighbour).and_then(Pixel::color) else {
                continue;
            };
            match self.rules.rule_for(color, direction.opposite()) {
                Ok(allowed) => restricted.union_with_complement(allowed),
                Err(AlgorithmError::NoRuleForDirection { .. }) => {}
                Err(error) => return Err(error),
            }
        }

        Ok(restricted)
    }

    fn enqueue_neighbours(&mut self, point: Point) {
        for (_, neighbour) in neighbours(point) {
            if self.grid.bounds().contains(neighbour) && !self.is_collapsed(neighbour) {
                self.queue.enqueue(neighbour);
            }
        }
    }

    /// Whether the pixel at `point` holds a color
    pub fn is_collapsed(&self, point: Point) -> bool {
        self.grid.get(point).is_some_and(Pixel::is_collapsed)
    }

    /// Pixel state at `point`, if it has been touched
    pub fn pixel(&self, point: Point) -> Option<&Pixel> {
        self.grid.get(point)
    }

    /// The target rectangle
    pub const fn bounds(&self) -> &BoundingBox {
        self.grid.bounds()
    }

    /// The rule table driving this canvas
    pub const fn rules(&self) -> &'r AdjacencyRules {
        self.rules
    }

    /// Number of collapsed pixels
    pub const fn collapsed_count(&self) -> usize {
        self.collapsed
    }

    /// Whether every coordinate in the target rectangle is collapsed
    pub const fn is_complete(&self) -> bool {
        self.collapsed == self.grid.bounds().area()
    }

    /// Number of coordinates waiting in the worklist
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pixels drawn without constraints under `ContradictionPolicy::Unconstrained`
    pub const fn contradictions(&self) -> usize {
        self.contradictions
    }

    /// Collapsed coordinates with their colors, in collapse-creation order
    pub fn collapsed_pixels(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.grid
            .iter()
            .filter_map(|(point, pixel)| pixel.color.map(|color| (point, color)))
    }
}

impl ImageSink for Canvas<'_> {
    fn bounds(&self) -> BoundingBox {
        *self.grid.bounds()
    }

    fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.grid.get([x, y]).and_then(Pixel::color)
    }
}
