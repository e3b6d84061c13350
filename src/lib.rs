//! # mark-extract
//!
//! Marker-delimited paragraph extraction for line-oriented text files.
//!
//! A source file marks paragraph boundaries by prefixing lines with a
//! chosen marker string (for example `###`). mark-extract scans the file
//! for marker lines, pairs the marker positions into (start, end) line
//! ranges under one of two pairing policies, and materializes the text
//! between boundaries as discrete paragraphs — returned both as an
//! ordered sequence and as a 1-based position map for downstream
//! consumers (summarizers, indexers).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   source    │──▶│   boundary    │──▶│   extract     │
//! │ read lines │   │ pair markers │   │ slice + join │
//! └────────────┘   └──────────────┘   └──────┬───────┘
//!                                            │
//!                        ┌───────────────────┤
//!                        ▼                   ▼
//!                   ┌──────────┐       ┌──────────┐
//!                   │   CLI    │       │  batch    │
//!                   │  (mex)   │       │  walker  │
//!                   └──────────┘       └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! mex scan notes.txt --marker "###"       # inspect marker positions
//! mex extract notes.txt --marker "###"    # disjoint paragraph pairs
//! mex extract notes.txt --marker "###" --overlapping
//! mex batch ./notes --marker "###" --include "**/*.txt"
//! ```
//!
//! ## Library Use
//!
//! ```rust
//! use mark_extract::extract::{extract_paragraphs, ExtractOptions};
//! use mark_extract::models::PairingMode;
//!
//! let lines: Vec<String> = ["###\n", "alpha\n", "beta\n", "###\n"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let opts = ExtractOptions::new("###", PairingMode::NonOverlapping);
//! let out = extract_paragraphs(&lines, &opts);
//! assert_eq!(out.paragraphs.len(), 1);
//! assert_eq!(out.by_position[&1], out.paragraphs[0]);
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Core data types |
//! | [`source`] | Line-oriented file reading |
//! | [`boundary`] | Marker-index boundary pairing |
//! | [`extract`] | Paragraph slicing and assembly |
//! | [`batch`] | Directory-batch extraction |

pub mod batch;
pub mod boundary;
pub mod extract;
pub mod models;
pub mod source;
