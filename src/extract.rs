//! Paragraph extraction from marker-delimited line sequences.
//!
//! The extractor scans a line sequence for lines beginning with the
//! configured marker string, pairs the resulting indices via
//! [`crate::boundary`], and materializes one paragraph per boundary pair.
//! Results come back in two equivalent views: an ordered sequence and a
//! mapping keyed by 1-based position, for downstream consumers that want
//! either shape.
//!
//! Extraction itself never fails. Degenerate marker sets (none found, a
//! single marker) produce an empty result, and the lenient edge cases —
//! odd marker count, a marker on line 0 — surface as [`Warning`]s on the
//! result instead of errors.

use std::collections::BTreeMap;
use std::path::Path;

use crate::boundary::pair_boundaries;
use crate::models::{Extraction, PairingMode, Warning};
use crate::source::{read_lines, SourceError};

/// Options for one extraction call.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Lines beginning with this string delimit paragraph boundaries.
    /// Exact prefix match, case-sensitive; no pattern matching.
    pub marker: String,
    /// Pairing policy for the scanned marker indices.
    pub mode: PairingMode,
    /// Separator inserted between lines when a paragraph is materialized.
    /// Empty by default; line terminators are already part of each line.
    pub separator: String,
}

impl ExtractOptions {
    pub fn new(marker: impl Into<String>, mode: PairingMode) -> Self {
        Self {
            marker: marker.into(),
            mode,
            separator: String::new(),
        }
    }
}

/// Collect the indices of lines whose content starts with `marker`.
///
/// Indices come back strictly increasing (line order).
pub fn scan_marker_lines(lines: &[String], marker: &str) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with(marker))
        .map(|(index, _)| index)
        .collect()
}

/// Join a slice of lines into one string with the given separator.
pub fn join_lines(parts: &[String], separator: &str) -> String {
    parts.join(separator)
}

/// Extract marker-delimited paragraphs from `lines`.
pub fn extract_paragraphs(lines: &[String], opts: &ExtractOptions) -> Extraction {
    let marker_indices = scan_marker_lines(lines, &opts.marker);
    let warnings = diagnose(&marker_indices, opts.mode);
    let pairs = pair_boundaries(&marker_indices, opts.mode);

    let mut paragraphs = Vec::with_capacity(pairs.len());
    let mut by_position = BTreeMap::new();
    for (position, (start, end)) in pairs.iter().enumerate() {
        // out-of-range pairs materialize as empty rather than panicking
        let slice = lines.get(start..end).unwrap_or(&[]);
        let text = join_lines(slice, &opts.separator);
        by_position.insert(position + 1, text.clone());
        paragraphs.push(text);
    }

    Extraction {
        paragraphs,
        by_position,
        warnings,
    }
}

/// Read `path` and extract paragraphs from its lines.
///
/// The only failure is an unreadable source; everything after the read is
/// purely computational.
pub fn extract_file(path: &Path, opts: &ExtractOptions) -> Result<Extraction, SourceError> {
    let lines = read_lines(path)?;
    Ok(extract_paragraphs(&lines, opts))
}

fn diagnose(marker_indices: &[usize], mode: PairingMode) -> Vec<Warning> {
    let mut warnings = Vec::new();
    // parity and the start-offset clamp only matter for disjoint pairing
    if mode == PairingMode::NonOverlapping {
        if marker_indices.len() % 2 == 1 {
            warnings.push(Warning::OddMarkerCount {
                count: marker_indices.len(),
            });
        }
        if marker_indices.first() == Some(&0) {
            warnings.push(Warning::MarkerAtLineZero);
        }
    }
    warnings
}
