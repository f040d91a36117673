//! Builder pattern API for ergonomic k-mer counting.
//!
//! This module provides a fluent builder interface for configuring and executing
//! k-mer counting operations.
//!
//! # Example
//!
//! ```rust
//! use kmergen::alphabet::BaseSet;
//! use kmergen::builder::KmerCounter;
//!
//! let counts = KmerCounter::new()
//!     .k(3)?
//!     .base_set(BaseSet::Dubious2)
//!     .count("AUCAUCAUGGGAUAUAUUGGCCCCCUAARCUUAUAUCUCUGGSAAUGACUCUAUAUU")?;
//!
//! assert_eq!(counts.get("AUC"), Some(&3));
//! assert_eq!(counts.get("AAR"), Some(&1));
//! # Ok::<(), kmergen::error::KmerGenError>(())
//! ```

use std::io::Write;

use crate::{
    alphabet::BaseSet,
    cli::OutputFormat,
    error::{KmerGenError, KmerLengthError},
    kmer::KmerLength,
    matcher::Sequence,
    run::{count_validated, count_validated_parallel, write_counts, KmerCounts},
};

/// A builder for configuring k-mer counting operations.
///
/// Use [`KmerCounter::new()`] to create a new builder, configure it with the
/// fluent API, then call [`count()`](KmerCounter::count) or
/// [`count_to_writer()`](KmerCounter::count_to_writer) to execute.
#[derive(Debug, Clone)]
pub struct KmerCounter {
    k: Option<KmerLength>,
    base_set: BaseSet,
    min_count: usize,
    format: OutputFormat,
    parallel: bool,
}

impl Default for KmerCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl KmerCounter {
    /// Creates a new `KmerCounter` builder with default settings.
    ///
    /// Default settings:
    /// - `k`: None (must be set before counting)
    /// - `base_set`: [`BaseSet::Pure`]
    /// - `min_count`: 1 (include all observed k-mers)
    /// - `format`: JSON
    /// - `parallel`: false
    #[must_use]
    pub const fn new() -> Self {
        Self {
            k: None,
            base_set: BaseSet::Pure,
            min_count: 1,
            format: OutputFormat::Json,
            parallel: false,
        }
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmergen::builder::KmerCounter;
    ///
    /// let counter = KmerCounter::new().k(4)?;
    /// # Ok::<(), kmergen::error::KmerLengthError>(())
    /// ```
    pub fn k(mut self, k: usize) -> Result<Self, KmerLengthError> {
        self.k = Some(KmerLength::new(k)?);
        Ok(self)
    }

    /// Sets the k-mer length from a pre-validated `KmerLength`.
    #[must_use]
    pub const fn k_validated(mut self, k: KmerLength) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the base set candidates are drawn from.
    #[must_use]
    pub const fn base_set(mut self, base_set: BaseSet) -> Self {
        self.base_set = base_set;
        self
    }

    /// Sets the minimum count threshold.
    ///
    /// K-mers with counts below this threshold will be excluded from results.
    /// Default is 1 (include every k-mer that occurs).
    #[must_use]
    pub const fn min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Sets the output format for [`count_to_writer()`](Self::count_to_writer).
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Counts candidates on the rayon thread pool when `true`.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Counts k-mers in `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerGenError::KmerLengthNotSet`] if `k` has not been set, or
    /// [`KmerGenError::InvalidArgument`] if a parallel run has more candidates
    /// than fit in a `usize`.
    pub fn count(&self, sequence: &str) -> Result<KmerCounts, KmerGenError> {
        let k = self.k.ok_or(KmerGenError::KmerLengthNotSet)?;
        let sequence = Sequence::new(sequence);

        let counts = if self.parallel {
            count_validated_parallel(&sequence, k, self.base_set)?
        } else {
            count_validated(&sequence, k, self.base_set)
        };

        // Apply min_count filter
        if self.min_count > 1 {
            Ok(counts
                .into_iter()
                .filter(|(_, count)| *count >= self.min_count)
                .collect())
        } else {
            Ok(counts)
        }
    }

    /// Counts k-mers and writes results to a writer in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` has not been set or output cannot be written.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmergen::builder::KmerCounter;
    /// use kmergen::cli::OutputFormat;
    ///
    /// let mut out = Vec::new();
    /// KmerCounter::new()
    ///     .k(2)?
    ///     .format(OutputFormat::Tsv)
    ///     .count_to_writer("AATT", &mut out)?;
    ///
    /// assert_eq!(String::from_utf8(out)?, "AA\t1\nAT\t1\nTT\t1\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn count_to_writer<W: Write>(
        &self,
        sequence: &str,
        mut writer: W,
    ) -> Result<(), KmerGenError> {
        let counts = self.count(sequence)?;
        write_counts(
            &mut writer,
            &counts,
            self.base_set,
            self.format,
            self.min_count,
        )
    }

    /// Returns the configured k-mer length, if set.
    #[must_use]
    pub const fn get_k(&self) -> Option<KmerLength> {
        self.k
    }

    /// Returns the configured base set.
    #[must_use]
    pub const fn get_base_set(&self) -> BaseSet {
        self.base_set
    }

    /// Returns the configured minimum count threshold.
    #[must_use]
    pub const fn get_min_count(&self) -> usize {
        self.min_count
    }

    /// Returns the configured output format.
    #[must_use]
    pub const fn get_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_default() {
        let counter = KmerCounter::new();
        assert!(counter.get_k().is_none());
        assert_eq!(counter.get_base_set(), BaseSet::Pure);
        assert_eq!(counter.get_min_count(), 1);
        assert_eq!(counter.get_format(), OutputFormat::Json);
    }

    #[test]
    fn builder_k_invalid() {
        assert!(KmerCounter::new().k(0).is_err());
    }

    #[test]
    fn builder_chained() {
        let counter = KmerCounter::new()
            .k(3)
            .unwrap()
            .base_set(BaseSet::Full)
            .min_count(2)
            .format(OutputFormat::Fasta);

        assert_eq!(counter.get_k().unwrap().get(), 3);
        assert_eq!(counter.get_base_set(), BaseSet::Full);
        assert_eq!(counter.get_min_count(), 2);
        assert_eq!(counter.get_format(), OutputFormat::Fasta);
    }

    #[test]
    fn builder_k_validated() {
        let k = KmerLength::new(5).unwrap();
        let counter = KmerCounter::new().k_validated(k);
        assert_eq!(counter.get_k(), Some(k));
    }

    #[test]
    fn builder_count_without_k_fails() {
        let result = KmerCounter::new().count("ACGT");
        assert!(matches!(result, Err(KmerGenError::KmerLengthNotSet)));
    }

    #[test]
    fn builder_min_count_filters() {
        let counts = KmerCounter::new()
            .k(2)
            .unwrap()
            .min_count(2)
            .count("AAAATT")
            .unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("AA"), Some(&2));
    }

    #[test]
    fn builder_parallel_agrees() {
        let counter = KmerCounter::new().k(2).unwrap().base_set(BaseSet::Full);
        let sequential = counter.count("NNACGTRYN").unwrap();
        let parallel = counter.clone().parallel(true).count("NNACGTRYN").unwrap();
        assert_eq!(sequential, parallel);
    }
}
