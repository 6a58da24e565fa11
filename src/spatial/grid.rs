//! Bounded sparse storage for lazily populated canvases
//!
//! Cells are created on first touch. A dense slot table covering the bounds
//! maps each coordinate to an index into a compact arena, so memory for cell
//! payloads only grows with the number of touched coordinates.

use ndarray::Array2;

use crate::spatial::direction::Point;

/// Axis-aligned bounding box for generation constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Box covering `width` x `height` pixels anchored at the origin
    ///
    /// A zero dimension yields a box that contains nothing.
    pub const fn from_size(width: usize, height: usize) -> Self {
        Self {
            min: [0, 0],
            max: [width as i32 - 1, height as i32 - 1],
        }
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: Point) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        if self.max[0] < self.min[0] {
            0
        } else {
            (self.max[0] - self.min[0] + 1) as usize
        }
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        if self.max[1] < self.min[1] {
            0
        } else {
            (self.max[1] - self.min[1] + 1) as usize
        }
    }

    /// Total number of coordinates inside the box
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Iterate all contained points in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let [min_x, min_y] = self.min;
        let [max_x, max_y] = self.max;
        (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| [x, y]))
    }

    // Row/column inside the slot table
    const fn local_index(&self, pos: Point) -> Option<[usize; 2]> {
        if self.contains(pos) {
            Some([
                (pos[1] - self.min[1]) as usize,
                (pos[0] - self.min[0]) as usize,
            ])
        } else {
            None
        }
    }
}

/// Lazily populated grid restricted to a bounding box
///
/// Slot value 0 marks an untouched coordinate; any other value is one past
/// the arena index of the cell.
#[derive(Debug, Clone)]
pub struct SparseGrid<T> {
    bounds: BoundingBox,
    slots: Array2<u32>,
    cells: Vec<(Point, T)>,
}

impl<T> SparseGrid<T> {
    /// Create an empty grid covering `bounds`
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            slots: Array2::zeros((bounds.height(), bounds.width())),
            cells: Vec::new(),
        }
    }

    /// The covered region
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Number of touched coordinates
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no coordinate has been touched yet
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn slot(&self, pos: Point) -> Option<usize> {
        let [row, col] = self.bounds.local_index(pos)?;
        match self.slots.get([row, col]).copied() {
            Some(0) | None => None,
            Some(slot) => Some(slot as usize - 1),
        }
    }

    /// Cell at `pos`, if it has been created
    pub fn get(&self, pos: Point) -> Option<&T> {
        let index = self.slot(pos)?;
        self.cells.get(index).map(|(_, cell)| cell)
    }

    /// Mutable cell at `pos`, if it has been created
    pub fn get_mut(&mut self, pos: Point) -> Option<&mut T> {
        let index = self.slot(pos)?;
        self.cells.get_mut(index).map(|(_, cell)| cell)
    }

    /// Fetch the cell at `pos`, creating it with `init` on first touch
    ///
    /// Returns `None` when `pos` lies outside the bounds.
    pub fn get_or_insert_with(&mut self, pos: Point, init: impl FnOnce() -> T) -> Option<&mut T> {
        let [row, col] = self.bounds.local_index(pos)?;
        let slot = self.slots.get_mut([row, col])?;
        let index = if *slot == 0 {
            self.cells.push((pos, init()));
            *slot = self.cells.len() as u32;
            self.cells.len() - 1
        } else {
            *slot as usize - 1
        };
        self.cells.get_mut(index).map(|(_, cell)| cell)
    }

    /// Touched cells in creation order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }
}
