//! Eager frame recording of a bubble sort run

use std::sync::Arc;

use super::frame::{Frame, Recording};

/// Run bubble sort over a private copy of `values`, capturing every
/// comparison and swap as a frame.
///
/// Frame order:
/// - an initial snapshot,
/// - one compare frame per comparison,
/// - one swap frame right after each swap,
/// - a final snapshot once the sort terminates.
///
/// A pass without swaps ends the sort early. An empty input produces a
/// single snapshot frame.
pub fn record_bubble_sort(values: &[u32]) -> Recording {
    let mut work = values.to_vec();
    let mut current: Arc<[u32]> = Arc::from(values);
    let mut frames = vec![Frame::snapshot(current.clone())];

    if work.is_empty() {
        return finish(frames);
    }

    let len = work.len();
    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            frames.push(Frame::compare(current.clone(), j, j + 1));
            if work[j] > work[j + 1] {
                work.swap(j, j + 1);
                current = Arc::from(work.as_slice());
                frames.push(Frame::swap(current.clone(), j, j + 1));
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    frames.push(Frame::snapshot(current));
    finish(frames)
}

fn finish(frames: Vec<Frame>) -> Recording {
    let recording = Recording::new(frames);
    tracing::debug!(
        frames = recording.len(),
        comparisons = recording.comparison_count(),
        swaps = recording.swap_count(),
        "Recorded bubble sort"
    );
    recording
}
