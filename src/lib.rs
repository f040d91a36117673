//! # kmergen
//!
//! Enumerates every k-mer over a nucleotide base set and counts how often each
//! one occurs, literally and case-insensitively, in a DNA or RNA sequence.
//!
//! Base sets follow the IUPAC nucleotide codes and are cumulative: `pure`
//! (`ACGTU`), `dubious2` (adds `RYSWKM`), `dubious3` (adds `BDHV`) and `full`
//! (adds `N`). Ambiguity codes are matched as literal characters, never
//! expanded into the bases they stand for.
//!
//! ## Quick Start
//!
//! ```rust
//! use kmergen::alphabet::BaseSet;
//! use kmergen::run::count_kmers;
//!
//! let counts = count_kmers("AATT", 2, BaseSet::Pure)?;
//!
//! assert_eq!(counts.len(), 3);
//! assert_eq!(counts["AT"], 1);
//! # Ok::<(), kmergen::error::KmerGenError>(())
//! ```
//!
//! ## Overlap policy
//!
//! Each candidate is scanned for left to right and occurrences never overlap:
//! `"AAA"` contains one `"AA"`, `"AAAA"` two.
//!
//! ## Features
//!
//! - `tracing` (default): structured logging of counting runs via `tracing`

pub mod alphabet;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod kmer;
pub mod matcher;
pub mod run;
