//! Sample analysis: color palettes and adjacency rule extraction

/// Color values and dense palette ids
pub mod palette;
/// Per-color, per-direction adjacency rules and color frequencies
pub mod rules;
