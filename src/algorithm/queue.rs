//! FIFO worklist with amortised prefix compaction
//!
//! Items are appended to a growable buffer and consumed through a head
//! cursor. Once the consumed prefix dominates the buffer it is dropped in a
//! single move, so each item is copied a bounded number of times.

use crate::io::configuration::{QUEUE_COMPACTION_MIN, QUEUE_INITIAL_CAPACITY};

/// First-in first-out queue of pending coordinates
#[derive(Debug, Clone)]
pub struct WorkQueue<T> {
    items: Vec<T>,
    head: usize,
    compactions: usize,
}

impl<T: Copy> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> WorkQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(QUEUE_INITIAL_CAPACITY),
            head: 0,
            compactions: 0,
        }
    }

    /// Append an item at the back
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the item at the front
    ///
    /// Callers are expected to check `is_empty` first; an empty queue yields
    /// `None`.
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.items.get(self.head).copied()?;
        self.head += 1;

        if self.head >= QUEUE_COMPACTION_MIN && self.head * 2 > self.items.len() {
            let remaining = self.items.len() - self.head;
            self.items.copy_within(self.head.., 0);
            self.items.truncate(remaining);
            self.head = 0;
            self.compactions += 1;
        }

        Some(item)
    }

    /// Peek at the front item without consuming it
    pub fn front(&self) -> Option<&T> {
        self.items.get(self.head)
    }

    /// Whether every enqueued item has been consumed
    pub const fn is_empty(&self) -> bool {
        self.head >= self.items.len()
    }

    /// Number of items still waiting
    pub const fn len(&self) -> usize {
        self.items.len() - self.head
    }

    /// Items held in the backing buffer, consumed prefix included
    pub const fn backing_len(&self) -> usize {
        self.items.len()
    }

    /// How many times the consumed prefix has been dropped
    pub const fn compactions(&self) -> usize {
        self.compactions
    }
}
