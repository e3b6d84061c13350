//! Marker-index boundary pairing.
//!
//! Converts the flat sequence of marker line indices produced by the
//! scanner into parallel (start, end) sequences, one pair per paragraph.
//!
//! # Algorithm
//!
//! Two pairing policies exist:
//!
//! - [`PairingMode::Overlapping`]: consecutive markers form a pair. The
//!   earlier marker of each pair is the start; the end is pulled back one
//!   line so the boundary lands just before the later marker. Every
//!   interior marker therefore closes the preceding paragraph and opens
//!   the next one, and `n` markers yield `n - 1` pairs.
//! - [`PairingMode::NonOverlapping`]: markers are consumed in disjoint
//!   consecutive pairs. The even-position marker of each pair contributes
//!   `start = index - 1` (saturating at 0); the odd-position marker
//!   contributes `end = index` directly. `n` markers yield `n / 2` pairs;
//!   an odd trailing marker is dropped.
//!
//! Degenerate inputs (empty, or too short to form a pair) produce empty
//! output rather than an error. No parity validation is performed; callers
//! wanting symmetric results are responsible for supplying an even number
//! of markers.

use crate::models::{BoundaryPairs, PairingMode};

/// Pair marker line indices into paragraph boundaries.
///
/// `marker_indices` must be strictly increasing (the scanner produces them
/// in line order, so this holds for scanned input).
///
/// # Guarantees
///
/// - `starts.len() == ends.len()` for every input.
/// - Overlapping mode yields `len - 1` pairs when `len >= 2`, else none.
/// - Non-overlapping mode yields `len / 2` pairs.
pub fn pair_boundaries(marker_indices: &[usize], mode: PairingMode) -> BoundaryPairs {
    match mode {
        PairingMode::Overlapping => pair_overlapping(marker_indices),
        PairingMode::NonOverlapping => pair_disjoint(marker_indices),
    }
}

fn pair_overlapping(indices: &[usize]) -> BoundaryPairs {
    let mut pairs = BoundaryPairs::default();
    for window in indices.windows(2) {
        pairs.starts.push(window[0]);
        // end boundary lands just before the next marker line
        pairs.ends.push(window[1].saturating_sub(1));
    }
    pairs
}

fn pair_disjoint(indices: &[usize]) -> BoundaryPairs {
    let mut pairs = BoundaryPairs::default();
    // chunks_exact bounds the pairing; an odd trailing marker is dropped
    for pair in indices.chunks_exact(2) {
        pairs.starts.push(pair[0].saturating_sub(1));
        pairs.ends.push(pair[1]);
    }
    pairs
}
