//! K-mer length validation and candidate enumeration.
//!
//! Candidates are every k-length string over a base set's symbols, repetition
//! allowed, produced in lexicographic order of the base set's declared symbol
//! order (the last position varies fastest).
//!
//! # Example
//!
//! ```rust
//! use kmergen::alphabet::BaseSet;
//! use kmergen::kmer::{enumerate, KmerLength};
//!
//! let k = KmerLength::new(2)?;
//! let kmers: Vec<String> = enumerate(BaseSet::Pure, k).collect();
//!
//! assert_eq!(kmers.len(), 25);
//! assert_eq!(kmers[0], "AA");
//! assert_eq!(kmers[24], "UU");
//! # Ok::<(), kmergen::error::KmerLengthError>(())
//! ```

use std::{fmt, iter::FusedIterator, str::FromStr};

use crate::{
    alphabet::{resolve_tier, BaseSet},
    error::{KmerGenError, KmerLengthError},
};

/// A validated k-mer length (`k >= 1`).
///
/// There is no upper bound: the candidate space grows as `|alphabet|^k` and
/// callers are responsible for keeping `k` tractable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Smallest accepted k-mer length.
    pub const MIN: usize = 1;

    /// Creates a new `KmerLength`, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    pub const fn new(k: usize) -> Result<Self, KmerLengthError> {
        if k < Self::MIN {
            return Err(KmerLengthError { k, min: Self::MIN });
        }
        Ok(Self(k))
    }

    /// Returns the length as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

impl FromStr for KmerLength {
    type Err = KmerGenError;

    /// Parses a k-mer length from user input.
    ///
    /// Non-integers, zero and negative values are all rejected with
    /// [`KmerGenError::InvalidArgument`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let k: i64 = s
            .trim()
            .parse()
            .map_err(|_| KmerGenError::InvalidArgument {
                details: format!("'{s}' is not a valid k-mer length"),
            })?;
        if k < 1 {
            return Err(KmerGenError::InvalidArgument {
                details: format!("k-mer length must be at least {}, got {k}", Self::MIN),
            });
        }
        let k = usize::try_from(k).map_err(|_| KmerGenError::InvalidArgument {
            details: format!("k-mer length {k} does not fit in memory"),
        })?;
        Ok(Self::new(k)?)
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of candidates for a base set and k, or `None` if it overflows `usize`.
#[must_use]
pub fn candidate_count(tier: BaseSet, k: KmerLength) -> Option<usize> {
    let k = u32::try_from(k.get()).ok()?;
    resolve_tier(tier).len().checked_pow(k)
}

/// Lazily enumerates every k-mer candidate of a base set.
pub fn enumerate(tier: BaseSet, k: KmerLength) -> Kmers {
    Kmers::new(resolve_tier(tier), k)
}

/// Iterator over all k-length strings of a symbol set.
///
/// Walks the candidate space like an odometer: one index per position, the
/// rightmost index turning over first.
#[derive(Debug, Clone)]
pub struct Kmers {
    bases: Vec<char>,
    indices: Vec<usize>,
    remaining: Option<usize>,
    exhausted: bool,
}

impl Kmers {
    fn new(bases: Vec<char>, k: KmerLength) -> Self {
        let remaining = u32::try_from(k.get())
            .ok()
            .and_then(|exp| bases.len().checked_pow(exp));
        Self {
            exhausted: bases.is_empty(),
            indices: vec![0; k.get()],
            bases,
            remaining,
        }
    }

    /// Symbols the candidates are built from, in enumeration order.
    #[must_use]
    pub fn bases(&self) -> &[char] {
        &self.bases
    }

    /// Decodes the candidate at `rank` in enumeration order.
    ///
    /// `rank` is read as a base-`|alphabet|` number with `k` digits, so
    /// `nth_candidate(0)` is the first candidate regardless of how far this
    /// iterator has advanced. Ranks past the end wrap around.
    ///
    /// ```rust
    /// use kmergen::alphabet::BaseSet;
    /// use kmergen::kmer::{enumerate, KmerLength};
    ///
    /// let kmers = enumerate(BaseSet::Pure, KmerLength::new(3)?);
    /// assert_eq!(kmers.nth_candidate(0), "AAA");
    /// assert_eq!(kmers.nth_candidate(7), "ACG");
    /// # Ok::<(), kmergen::error::KmerLengthError>(())
    /// ```
    #[must_use]
    pub fn nth_candidate(&self, rank: usize) -> String {
        let radix = self.bases.len();
        let mut rank = rank;
        let mut kmer = vec![self.bases[0]; self.indices.len()];
        for slot in kmer.iter_mut().rev() {
            *slot = self.bases[rank % radix];
            rank /= radix;
        }
        kmer.into_iter().collect()
    }

    /// Moves the odometer forward, returning `false` once it wraps around.
    fn advance(&mut self) -> bool {
        let radix = self.bases.len();
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < radix {
                return true;
            }
            *index = 0;
        }
        false
    }
}

impl Iterator for Kmers {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let kmer: String = self.indices.iter().map(|&i| self.bases[i]).collect();
        self.exhausted = !self.advance();
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        Some(kmer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        self.remaining
            .map_or((usize::MAX, None), |n| (n, Some(n)))
    }
}

impl FusedIterator for Kmers {}
