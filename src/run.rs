//! K-mer counting and output.
//!
//! This module ties the pieces together: it resolves a base set, enumerates
//! every candidate k-mer, counts each one against the sequence, and keeps the
//! candidates that occur at least once.

use crate::{
    alphabet::{self, BaseSet},
    cli::OutputFormat,
    config::Config,
    error::KmerGenError,
    kmer::{candidate_count, enumerate, KmerLength, Kmers},
    matcher::Sequence,
};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::io::{stdout, BufWriter, Write};

#[cfg(feature = "tracing")]
use tracing::{debug, info, info_span};

/// Frequency mapping from k-mer to its number of occurrences.
///
/// Only k-mers that occur at least once are present.
pub type KmerCounts = FxHashMap<String, usize>;

/// Counts every k-mer of `tier` that occurs in `sequence`.
///
/// # Arguments
///
/// * `sequence` - DNA or RNA sequence, matched case-insensitively
/// * `k` - K-mer length (must be at least 1)
/// * `tier` - Base set the candidates are drawn from
///
/// # Errors
///
/// Returns [`KmerGenError::InvalidArgument`] if `k` is zero.
///
/// # Example
///
/// ```rust
/// use kmergen::alphabet::BaseSet;
/// use kmergen::run::count_kmers;
///
/// let counts = count_kmers("AATT", 2, BaseSet::Pure)?;
/// assert_eq!(counts.get("AA"), Some(&1));
/// assert_eq!(counts.get("AT"), Some(&1));
/// assert_eq!(counts.get("TT"), Some(&1));
/// assert_eq!(counts.len(), 3);
/// # Ok::<(), kmergen::error::KmerGenError>(())
/// ```
pub fn count_kmers(sequence: &str, k: usize, tier: BaseSet) -> Result<KmerCounts, KmerGenError> {
    let k = KmerLength::new(k)?;
    Ok(count_validated(&Sequence::new(sequence), k, tier))
}

/// Counts k-mers from unparsed arguments.
///
/// Both arguments are validated before any candidate is generated.
///
/// # Errors
///
/// Returns [`KmerGenError::InvalidArgument`] if `k` is not a positive integer
/// and [`KmerGenError::InvalidTier`] if `tier` is not a known base set name.
pub fn count_kmers_str(sequence: &str, k: &str, tier: &str) -> Result<KmerCounts, KmerGenError> {
    let k: KmerLength = k.parse()?;
    let tier: BaseSet = tier.parse()?;
    Ok(count_validated(&Sequence::new(sequence), k, tier))
}

/// Counts k-mers with candidates spread over the rayon thread pool.
///
/// Produces the same mapping as [`count_kmers`].
///
/// # Errors
///
/// Returns [`KmerGenError::InvalidArgument`] if `k` is zero or if the number
/// of candidates does not fit in a `usize`.
pub fn count_kmers_parallel(
    sequence: &str,
    k: usize,
    tier: BaseSet,
) -> Result<KmerCounts, KmerGenError> {
    let k = KmerLength::new(k)?;
    count_validated_parallel(&Sequence::new(sequence), k, tier)
}

pub(crate) fn count_validated(sequence: &Sequence, k: KmerLength, tier: BaseSet) -> KmerCounts {
    #[cfg(feature = "tracing")]
    info!(k = k.get(), tier = %tier, sequence_len = sequence.len(), "Starting k-mer counting");

    if sequence.len() < k.get() {
        #[cfg(feature = "tracing")]
        debug!("Sequence shorter than k, no candidate can match");
        return KmerCounts::default();
    }

    let counts = count_candidates(sequence, enumerate(tier, k));

    #[cfg(feature = "tracing")]
    info!(unique_kmers = counts.len(), "K-mer counting complete");

    counts
}

pub(crate) fn count_validated_parallel(
    sequence: &Sequence,
    k: KmerLength,
    tier: BaseSet,
) -> Result<KmerCounts, KmerGenError> {
    #[cfg(feature = "tracing")]
    info!(k = k.get(), tier = %tier, sequence_len = sequence.len(), "Starting parallel k-mer counting");

    if sequence.len() < k.get() {
        return Ok(KmerCounts::default());
    }

    let total = candidate_count(tier, k).ok_or_else(|| KmerGenError::InvalidArgument {
        details: format!("too many {tier} candidates for k = {k}"),
    })?;

    #[cfg(feature = "tracing")]
    let _span = info_span!("count_candidates", candidates = total).entered();

    let kmers = enumerate(tier, k);
    let counts: KmerCounts = (0..total)
        .into_par_iter()
        .filter_map(|rank| {
            let kmer = kmers.nth_candidate(rank);
            let count = sequence.count(&kmer);
            (count > 0).then_some((kmer, count))
        })
        .collect();

    #[cfg(feature = "tracing")]
    info!(unique_kmers = counts.len(), "Parallel k-mer counting complete");

    Ok(counts)
}

fn count_candidates(sequence: &Sequence, kmers: Kmers) -> KmerCounts {
    let mut counts = KmerCounts::default();
    for kmer in kmers {
        let count = sequence.count(&kmer);
        if count > 0 {
            counts.insert(kmer, count);
        }
    }
    counts
}

/// Orders counts the way their k-mers are enumerated for `tier`.
///
/// K-mers containing symbols outside `tier` sort last.
#[must_use]
pub fn sorted_counts(counts: &KmerCounts, tier: BaseSet) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts
        .iter()
        .map(|(kmer, count)| (kmer.clone(), *count))
        .collect();
    entries.sort_by_cached_key(|(kmer, _)| {
        kmer.chars()
            .map(|c| tier.position(c).unwrap_or(usize::MAX))
            .collect::<Vec<_>>()
    });
    entries
}

/// Serializes ordered entries as a JSON object.
struct OrderedCounts<'a>(&'a [(String, usize)]);

impl Serialize for OrderedCounts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(kmer, count)| (kmer, count)))
    }
}

/// Writes counts to `writer` in enumeration order.
///
/// K-mers occurring fewer than `min_count` times are skipped.
///
/// # Errors
///
/// Returns [`KmerGenError::WriteError`] or [`KmerGenError::JsonError`] if
/// the output cannot be written.
pub fn write_counts<W: Write>(
    writer: &mut W,
    counts: &KmerCounts,
    tier: BaseSet,
    format: OutputFormat,
    min_count: usize,
) -> Result<(), KmerGenError> {
    let entries: Vec<(String, usize)> = sorted_counts(counts, tier)
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &OrderedCounts(&entries))?;
            writeln!(writer)?;
        }
        OutputFormat::Tsv => {
            for (kmer, count) in &entries {
                writeln!(writer, "{kmer}\t{count}")?;
            }
        }
        OutputFormat::Fasta => {
            for (kmer, count) in &entries {
                writeln!(writer, ">{count}\n{kmer}")?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Counts k-mers for a validated configuration and writes them to stdout.
///
/// # Errors
///
/// Returns [`KmerGenError`] if counting or writing fails.
pub fn run(config: &Config) -> Result<(), KmerGenError> {
    if config.describe {
        alphabet::describe(true);
    }

    let sequence = Sequence::new(&config.sequence);
    let counts = if config.parallel {
        count_validated_parallel(&sequence, config.k, config.base_set)?
    } else {
        count_validated(&sequence, config.k, config.base_set)
    };

    let mut buf = BufWriter::new(stdout());
    write_counts(
        &mut buf,
        &counts,
        config.base_set,
        config.format,
        config.min_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_pure_k2() {
        let counts = count_kmers("AATT", 2, BaseSet::Pure).unwrap();
        let expected: KmerCounts = [("AA", 1), ("AT", 1), ("TT", 1)]
            .into_iter()
            .map(|(kmer, count)| (kmer.to_string(), count))
            .collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn empty_sequence_gives_empty_mapping() {
        for tier in BaseSet::ALL {
            assert!(count_kmers("", 1, tier).unwrap().is_empty());
            assert!(count_kmers("", 3, tier).unwrap().is_empty());
        }
    }

    #[test]
    fn zero_k_is_rejected() {
        let err = count_kmers("ACGT", 0, BaseSet::Pure).unwrap_err();
        assert!(matches!(err, KmerGenError::InvalidArgument { .. }));
    }

    #[test]
    fn ambiguity_code_counted_literally() {
        let counts = count_kmers("AAR", 3, BaseSet::Dubious2).unwrap();
        assert_eq!(counts.get("AAR"), Some(&1));
        assert_eq!(counts.get("AAA"), None);
        assert_eq!(counts.get("AAG"), None);
    }

    #[test]
    fn symbols_outside_tier_are_not_candidates() {
        let counts = count_kmers("AAR", 3, BaseSet::Pure).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn lowercase_sequence_counts_under_uppercase_keys() {
        let counts = count_kmers("acgu", 2, BaseSet::Pure).unwrap();
        assert_eq!(counts.get("AC"), Some(&1));
        assert_eq!(counts.get("CG"), Some(&1));
        assert_eq!(counts.get("GU"), Some(&1));
    }

    #[test]
    fn str_arguments_are_validated() {
        assert!(matches!(
            count_kmers_str("ACGT", "x", "pure"),
            Err(KmerGenError::InvalidArgument { .. })
        ));
        assert!(matches!(
            count_kmers_str("ACGT", "-1", "pure"),
            Err(KmerGenError::InvalidArgument { .. })
        ));
        assert!(matches!(
            count_kmers_str("ACGT", "2", "bogus"),
            Err(KmerGenError::InvalidTier { .. })
        ));
        assert_eq!(count_kmers_str("ACGT", "2", "pure").unwrap().len(), 3);
    }

    #[test]
    fn parallel_matches_sequential() {
        let seq = "AUCAUCAUGGGAUAUAUUGGCCCCCUAARCUUAUAUCUCUGGSAAUGACUCUAUAUU";
        for tier in BaseSet::ALL {
            let sequential = count_kmers(seq, 3, tier).unwrap();
            let parallel = count_kmers_parallel(seq, 3, tier).unwrap();
            assert_eq!(sequential, parallel, "mismatch for {tier}");
        }
    }

    #[test]
    fn sorted_counts_follow_enumeration_order() {
        let counts = count_kmers("UUAAR", 1, BaseSet::Dubious2).unwrap();
        let order: Vec<String> = sorted_counts(&counts, BaseSet::Dubious2)
            .into_iter()
            .map(|(kmer, _)| kmer)
            .collect();
        assert_eq!(order, vec!["A", "U", "R"]);
    }

    #[test]
    fn write_json() {
        let counts = count_kmers("AATT", 2, BaseSet::Pure).unwrap();
        let mut out = Vec::new();
        write_counts(&mut out, &counts, BaseSet::Pure, OutputFormat::Json, 1).unwrap();
        let json = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(json.trim_end(), @r###"{"AA":1,"AT":1,"TT":1}"###);
    }

    #[test]
    fn write_tsv_with_min_count() {
        let counts = count_kmers("AAAATT", 2, BaseSet::Pure).unwrap();
        let mut out = Vec::new();
        write_counts(&mut out, &counts, BaseSet::Pure, OutputFormat::Tsv, 2).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "AA\t2\n");
    }

    #[test]
    fn write_fasta() {
        let counts = count_kmers("ACAC", 2, BaseSet::Pure).unwrap();
        let mut out = Vec::new();
        write_counts(&mut out, &counts, BaseSet::Pure, OutputFormat::Fasta, 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">2\nAC\n>1\nCA\n");
    }
}
