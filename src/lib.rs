//! Pixel-level wave collapse for synthesizing images that resemble a sample
//!
//! Rule extraction records, for every color in a sample image, which colors
//! were seen next to it in each of eight directions. Generation then grows a
//! canvas from one random seed pixel, collapsing each queued neighbour to a
//! color consistent with its already collapsed neighbours.

#![forbid(unsafe_code)]

/// Canvas propagation, the worklist, and the generation driver
pub mod algorithm;
/// Color palettes and adjacency rule extraction
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Directions, bounds, sparse storage, and raster interfaces
pub mod spatial;

pub use algorithm::executor::{Generator, GeneratorConfig, generate};
pub use algorithm::propagation::Canvas;
pub use analysis::palette::Color;
pub use analysis::rules::AdjacencyRules;
pub use io::error::{AlgorithmError, Result};
