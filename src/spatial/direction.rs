//! Eight-neighbour compass directions and point arithmetic
//!
//! Points are `[x, y]` in raster coordinates, so `y` grows downward and
//! `Direction::Up` moves towards row zero.

use std::fmt;

/// Canvas or sample coordinate as `[x, y]`
pub type Point = [i32; 2];

/// One of the eight neighbour directions around a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards smaller `y`
    Up,
    /// Towards larger `y`
    Down,
    /// Towards smaller `x`
    Left,
    /// Towards larger `x`
    Right,
    /// Smaller `x`, smaller `y`
    UpLeft,
    /// Larger `x`, smaller `y`
    UpRight,
    /// Smaller `x`, larger `y`
    DownLeft,
    /// Larger `x`, larger `y`
    DownRight,
}

impl Direction {
    /// All directions, orthogonal ones first
    ///
    /// Propagation enqueues neighbours in this order, which guarantees that a
    /// diagonal neighbour is dequeued after the orthogonal cells it touches.
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// Position of this direction in `Direction::ALL` and in per-direction tables
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::UpLeft => 4,
            Self::UpRight => 5,
            Self::DownLeft => 6,
            Self::DownRight => 7,
        }
    }

    /// The `[dx, dy]` unit offset
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
            Self::UpLeft => [-1, -1],
            Self::UpRight => [1, -1],
            Self::DownLeft => [-1, 1],
            Self::DownRight => [1, 1],
        }
    }

    /// The direction pointing back the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    /// Step one unit from `point` in this direction
    pub const fn apply(self, point: Point) -> Point {
        let [dx, dy] = self.offset();
        [point[0] + dx, point[1] + dy]
    }

    /// Whether the direction moves along a single axis
    pub const fn is_orthogonal(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
        };
        f.write_str(name)
    }
}

/// The eight neighbours of `point`, in `Direction::ALL` order
pub fn neighbours(point: Point) -> impl Iterator<Item = (Direction, Point)> {
    Direction::ALL
        .into_iter()
        .map(move |direction| (direction, direction.apply(point)))
}
