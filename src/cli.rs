//! Command-line interface definition.

use clap::{Parser, ValueEnum};

/// Counts every k-mer of a nucleotide base set in a DNA or RNA sequence.
#[derive(Parser, Debug)]
#[command(name = "kmergen")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// DNA or RNA sequence to scan, e.g. AUCAUCAUGGGAUAUAUUGG
    #[arg(short, long)]
    pub sequence: String,

    /// K-mer length (a positive integer)
    #[arg(short, long, default_value = "2", allow_hyphen_values = true)]
    pub k: String,

    /// Base set: pure, dubious2, dubious3 or full
    #[arg(short, long = "base-set", alias = "base_set", default_value = "pure")]
    pub base_set: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Minimum count threshold (k-mers below this are excluded)
    #[arg(short, long, default_value = "1")]
    pub min_count: usize,

    /// Print the meaning of every nucleotide symbol before counting
    #[arg(short, long)]
    pub describe: bool,

    /// Count candidates in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress informational output (only output k-mer counts)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for k-mer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// JSON object ({"kmer": count, ...})
    #[default]
    Json,
    /// Tab-separated values (kmer\tcount)
    Tsv,
    /// FASTA-like format (>{count}\n{kmer})
    Fasta,
}
