//! Adjacency rule extraction from a sample image
//!
//! For every sample pixel and each of the eight directions, the color found
//! one step away is recorded against the pixel's own color. Directions that
//! leave the sample contribute nothing, so edge colors may end up with fewer
//! recorded directions than interior ones. A missing direction means "no
//! evidence" and is distinct from an empty set.

use std::collections::BTreeMap;

use log::debug;

use crate::algorithm::colorset::ColorSet;
use crate::algorithm::selection::{RandomSelector, SelectionStrategy};
use crate::analysis::palette::{Color, ColorId, Palette};
use crate::io::error::{AlgorithmError, Result, invalid_source};
use crate::spatial::direction::{Direction, neighbours};
use crate::spatial::raster::ImageSource;

/// Colors observed around one sample color, per direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    directions: [Option<ColorSet>; 8],
}

impl Rule {
    /// Colors seen in `direction`, or `None` without evidence
    pub fn get(&self, direction: Direction) -> Option<&ColorSet> {
        self.directions
            .get(direction.index())
            .and_then(Option::as_ref)
    }

    /// Directions that carry at least one observation
    pub fn recorded_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.get(direction).is_some())
    }

    fn record(&mut self, direction: Direction, neighbour: ColorId, palette_len: usize) {
        if let Some(slot) = self.directions.get_mut(direction.index()) {
            slot.get_or_insert_with(|| ColorSet::new(palette_len))
                .insert(neighbour);
        }
    }
}

/// Per-color adjacency rules plus the sample's color distribution
///
/// Immutable once built; generation only reads from it.
#[derive(Debug, Clone)]
pub struct AdjacencyRules {
    palette: Palette,
    rules: Vec<Rule>,
    frequencies: Vec<u64>,
}

impl AdjacencyRules {
    /// Extract rules and frequencies from every pixel of `sample`
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the sample contains no pixels
    pub fn build<S: ImageSource + ?Sized>(sample: &S) -> Result<Self> {
        let bounds = sample.bounds();
        if bounds.area() == 0 {
            return Err(invalid_source(&"sample image has no pixels"));
        }

        let palette = Palette::from_colors(bounds.points().map(|[x, y]| sample.color_at(x, y)));
        let palette_len = palette.len();
        let mut rules = vec![Rule::default(); palette_len];
        let mut frequencies = vec![0_u64; palette_len];

        // Every sample color is in the palette, so lookups only fail off-sample
        let id_at = |point: [i32; 2]| palette.id_of(sample.color_at(point[0], point[1]));

        for point in bounds.points() {
            let Some(id) = id_at(point) else { continue };
            if let Some(count) = frequencies.get_mut(id) {
                *count += 1;
            }

            for (direction, neighbour) in neighbours(point) {
                if !bounds.contains(neighbour) {
                    continue;
                }
                if let (Some(rule), Some(neighbour_id)) = (rules.get_mut(id), id_at(neighbour)) {
                    rule.record(direction, neighbour_id, palette_len);
                }
            }
        }

        debug!(
            "Extracted rules for {} colors from a {}x{} sample",
            palette_len,
            bounds.width(),
            bounds.height()
        );

        Ok(Self {
            palette,
            rules,
            frequencies,
        })
    }

    /// Start an empty builder for hand-assembled rule tables
    pub fn builder() -> RulesBuilder {
        RulesBuilder::default()
    }

    /// Colors permitted next to `color` in `direction`
    ///
    /// # Errors
    ///
    /// - `UnknownColor` if `color` never appeared in the sample
    /// - `NoRuleForDirection` if `color` appeared but nothing was observed in
    ///   `direction`
    pub fn rule_for(&self, color: Color, direction: Direction) -> Result<&ColorSet> {
        let rule = self
            .palette
            .id_of(color)
            .and_then(|id| self.rules.get(id))
            .ok_or(AlgorithmError::UnknownColor { color })?;

        rule.get(direction)
            .ok_or(AlgorithmError::NoRuleForDirection { color, direction })
    }

    /// Draw a color uniformly among the distinct colors not in `excluded`
    ///
    /// # Errors
    ///
    /// Returns `NoColorAvailable` when every known color is excluded
    pub fn random_unrestricted_color(
        &self,
        excluded: &ColorSet,
        selector: &mut RandomSelector,
    ) -> Result<Color> {
        self.select_unrestricted_color(excluded, selector, SelectionStrategy::Uniform)
    }

    /// Draw a color not in `excluded` using the given strategy
    ///
    /// Only colors with a non-zero sample count are candidates.
    ///
    /// # Errors
    ///
    /// Returns `NoColorAvailable` when every known color is excluded
    pub fn select_unrestricted_color(
        &self,
        excluded: &ColorSet,
        selector: &mut RandomSelector,
        strategy: SelectionStrategy,
    ) -> Result<Color> {
        let (candidates, weights): (Vec<ColorId>, Vec<f64>) = self
            .frequencies
            .iter()
            .enumerate()
            .filter(|&(id, &count)| count > 0 && !excluded.contains(id))
            .map(|(id, &count)| (id, count as f64))
            .unzip();

        selector
            .select(strategy, &weights)
            .and_then(|index| candidates.get(index).copied())
            .and_then(|id| self.palette.color(id))
            .ok_or(AlgorithmError::NoColorAvailable {
                position: None,
                restricted: excluded.len(),
                known: self.palette.len(),
            })
    }

    /// Empty restriction set sized for this rule table
    pub fn empty_set(&self) -> ColorSet {
        ColorSet::new(self.palette.len())
    }

    /// The full rule for `color`, if known
    pub fn rule(&self, color: Color) -> Option<&Rule> {
        self.palette.id_of(color).and_then(|id| self.rules.get(id))
    }

    /// Number of times `color` occurs in the sample
    pub fn frequency(&self, color: Color) -> u64 {
        self.palette
            .id_of(color)
            .and_then(|id| self.frequencies.get(id).copied())
            .unwrap_or(0)
    }

    /// Colors with their sample counts, in palette order
    pub fn frequencies(&self) -> impl Iterator<Item = (Color, u64)> + '_ {
        self.palette
            .colors()
            .iter()
            .copied()
            .zip(self.frequencies.iter().copied())
    }

    /// Sum of all color counts
    pub fn total_observations(&self) -> u64 {
        self.frequencies.iter().sum()
    }

    /// The palette of known colors
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Expand a set of palette ids back into colors
    pub fn colors_in(&self, set: &ColorSet) -> Vec<Color> {
        set.iter().filter_map(|id| self.palette.color(id)).collect()
    }
}

/// Incremental constructor for rule tables that do not come from an image
#[derive(Debug, Clone, Default)]
pub struct RulesBuilder {
    frequencies: BTreeMap<Color, u64>,
    observations: Vec<(Color, Direction, Color)>,
}

impl RulesBuilder {
    /// Add `occurrences` to the sample count of `color`
    #[must_use]
    pub fn count(mut self, color: Color, occurrences: u64) -> Self {
        *self.frequencies.entry(color).or_insert(0) += occurrences;
        self
    }

    /// Record that `neighbour` was seen in `direction` from `color`
    #[must_use]
    pub fn observe(mut self, color: Color, direction: Direction, neighbour: Color) -> Self {
        self.observations.push((color, direction, neighbour));
        self
    }

    /// Record `neighbour` in every direction from `color`
    #[must_use]
    pub fn observe_all(self, color: Color, neighbour: Color) -> Self {
        Direction::ALL
            .into_iter()
            .fold(self, |builder, direction| {
                builder.observe(color, direction, neighbour)
            })
    }

    /// Freeze the builder into a rule table
    pub fn build(self) -> AdjacencyRules {
        let palette = Palette::from_colors(
            self.frequencies.keys().copied().chain(
                self.observations
                    .iter()
                    .flat_map(|&(color, _, neighbour)| [color, neighbour]),
            ),
        );
        let palette_len = palette.len();

        let mut rules = vec![Rule::default(); palette_len];
        for (color, direction, neighbour) in self.observations {
            let ids = palette.id_of(color).zip(palette.id_of(neighbour));
            if let Some((id, neighbour_id)) = ids
                && let Some(rule) = rules.get_mut(id)
            {
                rule.record(direction, neighbour_id, palette_len);
            }
        }

        let frequencies = palette
            .colors()
            .iter()
            .map(|color| self.frequencies.get(color).copied().unwrap_or(0))
            .collect();

        AdjacencyRules {
            palette,
            rules,
            frequencies,
        }
    }
}
