//! Palette-indexed color sets

use bitvec::prelude::*;
use std::fmt;

use crate::analysis::palette::ColorId;

/// Fixed-size bitset of palette ids
///
/// Sized to the palette it was created for. Ids outside that range are
/// ignored on insert and never reported as members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSet {
    bits: BitVec,
}

impl ColorSet {
    /// Create a set with no colors present
    pub fn new(palette_len: usize) -> Self {
        Self {
            bits: bitvec![0; palette_len],
        }
    }

    /// Size of the palette this set ranges over
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a color id
    pub fn insert(&mut self, id: ColorId) {
        if id < self.bits.len() {
            self.bits.set(id, true);
        }
    }

    /// Test color membership
    pub fn contains(&self, id: ColorId) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Merge another set into this one
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Add every id that is absent from `other`
    ///
    /// Used to turn a set of permitted colors into restrictions.
    pub fn union_with_complement(&mut self, other: &Self) {
        for id in 0..self.capacity() {
            if !other.contains(id) {
                self.bits.set(id, true);
            }
        }
    }

    /// Test if no colors are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count colors in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Member ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = ColorId> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all member ids as a vector
    pub fn to_vec(&self) -> Vec<ColorId> {
        self.iter().collect()
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorSet({} colors: {:?})", self.len(), self.to_vec())
    }
}
