//! Prefill image parsing for predetermined pixel placement

use std::path::Path;

use image::RgbaImage;

use crate::analysis::palette::Color;
use crate::analysis::rules::AdjacencyRules;
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::load_sample;
use crate::spatial::direction::Point;

/// Single pixel placement instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefillPlacement {
    /// Canvas coordinates for placement
    pub position: Point,
    /// Color to pin
    pub color: Color,
}

/// Pixels to pin before generation starts
#[derive(Debug, Clone)]
pub struct PrefillData {
    /// Placements in row-major order
    pub placements: Vec<PrefillPlacement>,
}

impl PrefillData {
    /// Parse prefill PNG into placements
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The PNG file cannot be loaded
    /// - The prefill image contains no colors from the sample palette
    pub fn from_png(path: &Path, rules: &AdjacencyRules) -> Result<Self> {
        let img = load_sample(path)?;
        Self::from_image(&img, rules)
    }

    /// Collect placements from an in-memory image
    ///
    /// Only pixels matching sample palette colors are pinned; every other
    /// pixel is left for generation. The image is aligned to the canvas origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the image contains no colors from the sample palette
    pub fn from_image(img: &RgbaImage, rules: &AdjacencyRules) -> Result<Self> {
        let placements: Vec<PrefillPlacement> = img
            .enumerate_pixels()
            .map(|(x, y, pixel)| PrefillPlacement {
                position: [x as i32, y as i32],
                color: Color::from(*pixel),
            })
            .filter(|placement| rules.frequency(placement.color) > 0)
            .collect();

        if placements.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "Prefill image contains no colors from source palette".to_string(),
            });
        }

        Ok(Self { placements })
    }

    /// Placements as `(position, color)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.placements.iter().map(|p| (p.position, p.color))
    }

    /// Number of pinned pixels
    pub const fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether there is nothing to pin
    pub const fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
