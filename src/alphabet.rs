//! Nucleotide alphabets and IUPAC ambiguity codes.
//!
//! Symbols are grouped into four cumulative base sets. Each set extends the
//! previous one, so `Pure ⊆ Dubious2 ⊆ Dubious3 ⊆ Full`:
//!
//! | base set   | adds                      | size |
//! |------------|---------------------------|------|
//! | `pure`     | `A C G T U`               | 5    |
//! | `dubious2` | `R Y S W K M`             | 11   |
//! | `dubious3` | `B D H V`                 | 15   |
//! | `full`     | `N`                       | 16   |
//!
//! # Example
//!
//! ```rust
//! use kmergen::alphabet::{resolve_tier, BaseSet};
//!
//! let bases = resolve_tier(BaseSet::Dubious2);
//! assert_eq!(bases.len(), 11);
//! assert_eq!(bases[..5], ['A', 'C', 'G', 'T', 'U']);
//! ```

use std::{fmt, str::FromStr};

use rustc_hash::FxHashMap;

use crate::error::KmerGenError;

type BaseTable = &'static [(char, &'static str)];

/// Unambiguous bases, DNA thymine and RNA uracil included.
const PURE_BASES: BaseTable = &[
    ('A', "Adenine"),
    ('C', "Cytosine"),
    ('G', "Guanine"),
    ('T', "Thymine"),
    ('U', "Uracil"),
];

/// Two-base ambiguity codes.
const TWO_BASE_CODES: BaseTable = &[
    ('R', "A or G"),
    ('Y', "C or T"),
    ('S', "G or C"),
    ('W', "A or T"),
    ('K', "G or T"),
    ('M', "A or C"),
];

/// Three-base ambiguity codes.
const THREE_BASE_CODES: BaseTable = &[
    ('B', "C or G or T"),
    ('D', "A or G or T"),
    ('H', "A or C or T"),
    ('V', "A or C or G"),
];

const ANY_BASE: BaseTable = &[('N', "any")];

const ALL_TABLES: &[BaseTable] = &[PURE_BASES, TWO_BASE_CODES, THREE_BASE_CODES, ANY_BASE];

/// Selects which symbols k-mer candidates are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BaseSet {
    /// `A C G T U`
    #[default]
    Pure,
    /// Pure plus the two-base codes `R Y S W K M`.
    Dubious2,
    /// Dubious2 plus the three-base codes `B D H V`.
    Dubious3,
    /// Dubious3 plus the wildcard `N`.
    Full,
}

impl BaseSet {
    /// Every base set, smallest first.
    pub const ALL: [Self; 4] = [Self::Pure, Self::Dubious2, Self::Dubious3, Self::Full];

    /// The name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::Dubious2 => "dubious2",
            Self::Dubious3 => "dubious3",
            Self::Full => "full",
        }
    }

    /// Symbol tables that make up this base set, in enumeration order.
    fn tables(self) -> &'static [BaseTable] {
        match self {
            Self::Pure => &[PURE_BASES],
            Self::Dubious2 => &[PURE_BASES, TWO_BASE_CODES],
            Self::Dubious3 => &[PURE_BASES, TWO_BASE_CODES, THREE_BASE_CODES],
            Self::Full => ALL_TABLES,
        }
    }

    /// Returns `true` if `symbol` (in either case) belongs to this base set.
    #[must_use]
    pub fn contains(self, symbol: char) -> bool {
        let symbol = symbol.to_ascii_uppercase();
        self.tables()
            .iter()
            .any(|table| table.iter().any(|(s, _)| *s == symbol))
    }

    /// Position of `symbol` in this base set's enumeration order.
    pub(crate) fn position(self, symbol: char) -> Option<usize> {
        let symbol = symbol.to_ascii_uppercase();
        self.tables()
            .iter()
            .flat_map(|table| table.iter())
            .position(|(s, _)| *s == symbol)
    }

    /// Looks up the biological meaning of any known symbol.
    ///
    /// ```rust
    /// use kmergen::alphabet::BaseSet;
    ///
    /// assert_eq!(BaseSet::meaning('r'), Some("A or G"));
    /// assert_eq!(BaseSet::meaning('X'), None);
    /// ```
    #[must_use]
    pub fn meaning(symbol: char) -> Option<&'static str> {
        let symbol = symbol.to_ascii_uppercase();
        ALL_TABLES
            .iter()
            .flat_map(|table| table.iter())
            .find(|(s, _)| *s == symbol)
            .map(|(_, meaning)| *meaning)
    }
}

impl FromStr for BaseSet {
    type Err = KmerGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|base_set| base_set.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KmerGenError::InvalidTier {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for BaseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps every known symbol, across all base sets, to its meaning.
///
/// With `verbose`, also prints each pair as `SYMBOL => meaning` to stdout,
/// pure bases first and the wildcard last.
pub fn describe(verbose: bool) -> FxHashMap<char, &'static str> {
    let mut descriptions = FxHashMap::default();
    for &(symbol, meaning) in ALL_TABLES.iter().flat_map(|table| table.iter()) {
        if verbose {
            println!("{symbol} => {meaning}");
        }
        descriptions.insert(symbol, meaning);
    }
    descriptions
}

/// Returns the ordered symbols of a base set.
///
/// Built by merging each lower table into the set in turn, so the symbols of
/// a smaller base set always form a prefix of a larger one.
#[must_use]
pub fn resolve_tier(tier: BaseSet) -> Vec<char> {
    tier.tables().iter().fold(Vec::new(), |bases, table| {
        ordered_union(bases, table.iter().map(|(symbol, _)| *symbol))
    })
}

/// Appends the symbols of `other` not yet present in `set`, keeping order.
fn ordered_union<I>(mut set: Vec<char>, other: I) -> Vec<char>
where
    I: IntoIterator<Item = char>,
{
    for symbol in other {
        if !set.contains(&symbol) {
            set.push(symbol);
        }
    }
    set
}
