//! # mark-extract CLI (`mex`)
//!
//! The `mex` binary is the command-line interface for mark-extract. It
//! extracts marker-delimited paragraphs from line-oriented text files.
//!
//! ## Usage
//!
//! ```bash
//! mex <command> [options]
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mex extract <file>` | Extract paragraphs from one file |
//! | `mex scan <file>` | Show marker positions and boundary pairs without extracting |
//! | `mex batch <root>` | Extract from every matching file under a directory |
//!
//! ## Examples
//!
//! ```bash
//! # Non-overlapping (disjoint) paragraph pairs delimited by ###
//! mex extract notes.txt --marker "###"
//!
//! # Overlapping mode: each interior marker closes one paragraph and opens the next
//! mex extract notes.txt --marker "###" --overlapping
//!
//! # Machine-readable output
//! mex extract notes.txt --marker "###" --format json
//!
//! # Check marker placement before extracting
//! mex scan notes.txt --marker "###"
//!
//! # A whole directory of marked-up notes
//! mex batch ./notes --marker "@@" --include "**/*.txt"
//! ```
//!
//! Paragraph text goes to stdout; warnings and errors go to stderr so
//! stdout remains parseable for scripts.

mod batch;
mod boundary;
mod extract;
mod models;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::batch::DEFAULT_INCLUDE_GLOBS;
use crate::extract::{extract_file, ExtractOptions};
use crate::models::{Extraction, PairingMode};

/// mark-extract CLI — extract marker-delimited paragraphs from
/// line-oriented text files.
#[derive(Parser)]
#[command(
    name = "mex",
    about = "Extract marker-delimited paragraphs from line-oriented text files",
    version,
    long_about = "mark-extract scans a text file for lines beginning with a chosen marker \
    string, pairs the marker positions into paragraph boundaries (overlapping or \
    non-overlapping), and prints the text between boundaries as discrete paragraphs."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Extract paragraphs from a single file.
    ///
    /// Scans for marker lines, pairs them into boundaries, and prints one
    /// paragraph per pair. Warnings about the lenient edge cases (odd
    /// marker count, marker on line 0) go to stderr.
    Extract {
        /// Input text file.
        file: PathBuf,

        /// Marker string; lines beginning with it delimit boundaries.
        #[arg(long, default_value = "###")]
        marker: String,

        /// Overlapping mode: each interior marker closes one paragraph and
        /// opens the next. Default is non-overlapping (disjoint pairs).
        #[arg(long)]
        overlapping: bool,

        /// Separator inserted between the lines of a paragraph.
        #[arg(long, default_value = "")]
        separator: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show marker positions and boundary pairs without extracting.
    ///
    /// Prints the indices of marker lines and the (start, end) pairs each
    /// pairing mode would produce. Useful for verifying marker placement
    /// before an extraction.
    Scan {
        /// Input text file.
        file: PathBuf,

        /// Marker string; lines beginning with it delimit boundaries.
        #[arg(long, default_value = "###")]
        marker: String,
    },

    /// Extract from every matching file under a directory.
    ///
    /// Walks the root, filters files with include/exclude globs, and runs
    /// the extractor on each match in deterministic (sorted) order.
    /// Unreadable files are reported on stderr and skipped.
    Batch {
        /// Root directory to walk.
        root: PathBuf,

        /// Marker string; lines beginning with it delimit boundaries.
        #[arg(long, default_value = "###")]
        marker: String,

        /// Overlapping pairing mode.
        #[arg(long)]
        overlapping: bool,

        /// Separator inserted between the lines of a paragraph.
        #[arg(long, default_value = "")]
        separator: String,

        /// Include glob, relative to the root (repeatable).
        /// Defaults to `**/*.txt` and `**/*.md`.
        #[arg(long = "include")]
        include_globs: Vec<String>,

        /// Exclude glob, relative to the root (repeatable).
        /// `**/.git/**` is always excluded.
        #[arg(long = "exclude")]
        exclude_globs: Vec<String>,

        /// Follow symbolic links while walking.
        #[arg(long)]
        follow_symlinks: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for extraction results.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable paragraphs on stdout.
    Text,
    /// JSON with both output views (sequence and position map).
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            marker,
            overlapping,
            separator,
            format,
        } => {
            let opts = options(marker, overlapping, separator);
            let extraction = extract_file(&file, &opts)?;
            report_warnings(&extraction, None);
            match format {
                OutputFormat::Text => print_extraction(&extraction),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&extraction)?),
            }
        }
        Commands::Scan { file, marker } => {
            run_scan(&file, &marker)?;
        }
        Commands::Batch {
            root,
            marker,
            overlapping,
            separator,
            include_globs,
            exclude_globs,
            follow_symlinks,
            format,
        } => {
            let opts = options(marker, overlapping, separator);
            run_batch_cmd(
                &root,
                include_globs,
                exclude_globs,
                follow_symlinks,
                &opts,
                format,
            )?;
        }
    }

    Ok(())
}

fn options(marker: String, overlapping: bool, separator: String) -> ExtractOptions {
    let mode = if overlapping {
        PairingMode::Overlapping
    } else {
        PairingMode::NonOverlapping
    };
    let mut opts = ExtractOptions::new(marker, mode);
    opts.separator = separator;
    opts
}

/// Print warnings to stderr, prefixed with the file path in batch mode.
fn report_warnings(extraction: &Extraction, path: Option<&Path>) {
    for warning in &extraction.warnings {
        match path {
            Some(p) => eprintln!("warning: {}: {}", p.display(), warning),
            None => eprintln!("warning: {}", warning),
        }
    }
}

fn print_extraction(extraction: &Extraction) {
    if extraction.paragraphs.is_empty() {
        println!("No paragraphs extracted.");
        return;
    }

    println!("--- Paragraphs ({}) ---", extraction.paragraphs.len());
    for (position, text) in &extraction.by_position {
        println!("[paragraph {}]", position);
        println!("{}", text);
        println!();
    }
}

fn run_scan(file: &Path, marker: &str) -> Result<()> {
    let lines = source::read_lines(file)?;
    let indices = extract::scan_marker_lines(&lines, marker);

    println!("file:          {}", file.display());
    println!("lines:         {}", lines.len());
    println!("marker:        {:?}", marker);
    println!("marker lines:  {:?}", indices);
    println!();

    for (label, mode) in [
        ("non-overlapping", PairingMode::NonOverlapping),
        ("overlapping", PairingMode::Overlapping),
    ] {
        let pairs = boundary::pair_boundaries(&indices, mode);
        if pairs.is_empty() {
            println!("{:<16} no complete pairs", label);
        } else {
            println!(
                "{:<16} {} paragraphs  starts={:?} ends={:?}",
                label,
                pairs.len(),
                pairs.starts,
                pairs.ends
            );
        }
    }

    Ok(())
}

fn run_batch_cmd(
    root: &Path,
    include_globs: Vec<String>,
    exclude_globs: Vec<String>,
    follow_symlinks: bool,
    opts: &ExtractOptions,
    format: OutputFormat,
) -> Result<()> {
    let includes = if include_globs.is_empty() {
        DEFAULT_INCLUDE_GLOBS.iter().map(|s| s.to_string()).collect()
    } else {
        include_globs
    };

    let entries = batch::run_batch(root, &includes, &exclude_globs, follow_symlinks, opts)?;

    match format {
        OutputFormat::Text => {
            let mut extracted = 0usize;
            let mut skipped = 0usize;
            for entry in &entries {
                match &entry.result {
                    Ok(extraction) => {
                        report_warnings(extraction, Some(&entry.path));
                        println!(
                            "{}: {} paragraphs",
                            entry.path.display(),
                            extraction.paragraphs.len()
                        );
                        extracted += extraction.paragraphs.len();
                    }
                    Err(e) => {
                        eprintln!("skipping {}: {}", entry.path.display(), e);
                        skipped += 1;
                    }
                }
            }
            println!();
            println!("files scanned: {}", entries.len());
            println!("files skipped: {}", skipped);
            println!("paragraphs extracted: {}", extracted);
        }
        OutputFormat::Json => {
            // one JSON object per file, line-delimited
            for entry in &entries {
                let obj = match &entry.result {
                    Ok(extraction) => serde_json::json!({
                        "file": entry.path.display().to_string(),
                        "paragraphs": extraction.paragraphs,
                        "by_position": extraction.by_position,
                        "warnings": extraction.warnings,
                    }),
                    Err(e) => serde_json::json!({
                        "file": entry.path.display().to_string(),
                        "error": e.to_string(),
                    }),
                };
                println!("{}", serde_json::to_string(&obj)?);
            }
        }
    }

    Ok(())
}
