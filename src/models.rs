//! Core data models used throughout mark-extract.
//!
//! These types represent the pairing mode, boundary pairs, warnings, and
//! extracted paragraph collections that flow through the extraction
//! pipeline.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Pairing policy applied to the scanned marker indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingMode {
    /// Each interior marker closes one paragraph and opens the next.
    Overlapping,
    /// Markers are consumed in disjoint consecutive pairs; each marker
    /// belongs to at most one boundary.
    NonOverlapping,
}

/// Parallel (start, end) line-index sequences, one pair per paragraph.
///
/// Each pair delimits the slice `[start, end)` of the line sequence that
/// one paragraph materializes from. `starts` and `ends` always have equal
/// length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryPairs {
    pub starts: Vec<usize>,
    pub ends: Vec<usize>,
}

impl BoundaryPairs {
    /// Number of boundary pairs.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Iterate over (start, end) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.starts.iter().copied().zip(self.ends.iter().copied())
    }
}

/// Non-fatal conditions diagnosed during extraction.
///
/// The extractor never fails on a malformed marker set; these record what
/// the lenient behavior did so callers can surface it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    /// An odd number of markers was found; the final marker has no partner
    /// and was dropped from the pairing.
    OddMarkerCount { count: usize },
    /// The first marker sits on line 0; its start index saturated to 0
    /// instead of going negative.
    MarkerAtLineZero,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::OddMarkerCount { count } => write!(
                f,
                "odd marker count ({}); the final marker has no partner and was dropped",
                count
            ),
            Warning::MarkerAtLineZero => {
                write!(f, "first marker is on line 0; its start index was clamped to 0")
            }
        }
    }
}

/// The dual-view result of one extraction.
///
/// `paragraphs` and `by_position` always hold identical content:
/// `by_position[k] == paragraphs[k - 1]` for every 1-based position `k`.
/// Both views are built together and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    /// Paragraph strings in pairing order.
    pub paragraphs: Vec<String>,
    /// The same paragraphs keyed by 1-based sequential position.
    pub by_position: BTreeMap<usize, String>,
    /// Non-fatal diagnoses of the lenient edge cases.
    pub warnings: Vec<Warning>,
}
