//! Spatial data structures and coordinate arithmetic
//!
//! This module contains spatial-related functionality including:
//! - The eight-neighbour direction table
//! - Bounding boxes and the sparse canvas storage
//! - Image source and sink interfaces

/// Compass directions and point arithmetic
pub mod direction;
/// Bounding boxes and lazily populated grid storage
pub mod grid;
/// Interfaces for reading samples and exposing generated images
pub mod raster;

pub use direction::{Direction, Point};
pub use grid::{BoundingBox, SparseGrid};
