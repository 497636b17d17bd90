//! Recorded sort frames
//!
//! A [`Frame`] is one snapshot of the array plus the indices highlighted at
//! that point of the sort. A [`Recording`] is the ordered, immutable list of
//! frames produced by a single sort run.

use std::sync::Arc;

/// Snapshot of the array at one step of a sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Array values at this step. Shared with neighbouring frames when the
    /// step did not move anything.
    values: Arc<[u32]>,
    /// Pair of indices being compared
    active: Option<[usize; 2]>,
    /// Pair of indices that were just exchanged
    swapped: Option<[usize; 2]>,
}

impl Frame {
    /// Frame with no highlighted indices
    pub fn snapshot(values: Arc<[u32]>) -> Self {
        Self {
            values,
            active: None,
            swapped: None,
        }
    }

    /// Frame marking `i` and `j` as being compared
    pub fn compare(values: Arc<[u32]>, i: usize, j: usize) -> Self {
        Self {
            values,
            active: Some([i, j]),
            swapped: None,
        }
    }

    /// Frame marking `i` and `j` as compared and just swapped
    pub fn swap(values: Arc<[u32]>, i: usize, j: usize) -> Self {
        Self {
            values,
            active: Some([i, j]),
            swapped: Some([i, j]),
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Indices currently being compared
    pub fn active(&self) -> &[usize] {
        self.active.as_ref().map(|pair| pair.as_slice()).unwrap_or_default()
    }

    /// Indices that were just swapped
    pub fn swapped(&self) -> &[usize] {
        self.swapped.as_ref().map(|pair| pair.as_slice()).unwrap_or_default()
    }

    pub fn is_swap(&self) -> bool {
        self.swapped.is_some()
    }

    pub fn is_compare(&self) -> bool {
        self.active.is_some() && self.swapped.is_none()
    }
}

/// Ordered frames from one complete sort run.
///
/// Never empty, and never mutated after construction: a new run produces a
/// new `Recording`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    frames: Vec<Frame>,
    comparisons: usize,
    swaps: usize,
}

impl Recording {
    /// Build a recording from frames collected by a recorder.
    /// Recorders always emit at least the initial snapshot.
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        debug_assert!(!frames.is_empty(), "recording without frames");
        let comparisons = frames.iter().filter(|f| f.is_compare()).count();
        let swaps = frames.iter().filter(|f| f.is_swap()).count();
        Self {
            frames,
            comparisons,
            swaps,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Highest valid cursor position
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn first(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn last(&self) -> &Frame {
        &self.frames[self.last_index()]
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of compare frames, counted once at construction
    pub fn comparison_count(&self) -> usize {
        self.comparisons
    }

    /// Number of swap frames, counted once at construction
    pub fn swap_count(&self) -> usize {
        self.swaps
    }
}
