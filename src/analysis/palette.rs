//! Color values and the dense palette mapping used by the rule tables

use std::collections::HashMap;
use std::fmt;

use image::Rgba;

/// Packed RGBA color, compared by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Build a color from its four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Self(pixel.0)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Self(color.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Dense index of a color inside a `Palette`
pub type ColorId = usize;

/// Sorted set of distinct colors with O(1) lookup in both directions
///
/// Deterministic color ordering ensures reproducible selections for a
/// fixed random seed.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Color>,
    ids: HashMap<Color, ColorId>,
}

impl Palette {
    /// Build a palette from any collection of colors, dropping duplicates
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut colors: Vec<Color> = colors.into_iter().collect();
        colors.sort_unstable();
        colors.dedup();

        let ids = colors
            .iter()
            .enumerate()
            .map(|(id, &color)| (color, id))
            .collect();

        Self { colors, ids }
    }

    /// Id of `color`, if present
    pub fn id_of(&self, color: Color) -> Option<ColorId> {
        self.ids.get(&color).copied()
    }

    /// Color stored under `id`
    pub fn color(&self, id: ColorId) -> Option<Color> {
        self.colors.get(id).copied()
    }

    /// Number of distinct colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in id order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
