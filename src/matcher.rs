//! Literal, case-insensitive pattern counting.
//!
//! Occurrences are counted left to right without overlap: once a match is
//! found the scan resumes after its last character, so `"AAA"` holds a single
//! `"AA"`. Line breaks are ordinary characters and the sequence is never split.

/// A sequence normalized for matching.
///
/// Upper-cases the input once so that many candidates can be counted against
/// it without repeating the work.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence(String);

impl Sequence {
    /// Normalizes `raw` for case-insensitive matching.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_ascii_uppercase())
    }

    /// The normalized sequence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the sequence in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts non-overlapping occurrences of `pattern`, ignoring case.
    ///
    /// An empty pattern never matches.
    #[must_use]
    pub fn count(&self, pattern: &str) -> usize {
        if pattern.is_empty() || pattern.len() > self.0.len() {
            return 0;
        }
        if pattern.bytes().any(|b| b.is_ascii_lowercase()) {
            return self.0.matches(&pattern.to_ascii_uppercase()).count();
        }
        self.0.matches(pattern).count()
    }
}

impl From<&str> for Sequence {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Counts non-overlapping, case-insensitive literal occurrences of `pattern`.
///
/// ```rust
/// use kmergen::matcher::count_occurrences;
///
/// assert_eq!(count_occurrences("aaTT", "AATT"), 1);
/// assert_eq!(count_occurrences("AAAA", "aa"), 2);
/// ```
#[must_use]
pub fn count_occurrences(sequence: &str, pattern: &str) -> usize {
    Sequence::new(sequence).count(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        assert_eq!(count_occurrences("aaTT", "AATT"), 1);
        assert_eq!(count_occurrences("AATT", "aatt"), 1);
        assert_eq!(count_occurrences("aCgT", "cg"), 1);
    }

    #[test]
    fn non_overlapping_scan() {
        assert_eq!(count_occurrences("AAA", "AA"), 1);
        assert_eq!(count_occurrences("AAAA", "AA"), 2);
        assert_eq!(count_occurrences("ACACA", "ACA"), 1);
    }

    #[test]
    fn no_match() {
        assert_eq!(count_occurrences("ACGT", "TTT"), 0);
        assert_eq!(count_occurrences("", "A"), 0);
        assert_eq!(count_occurrences("AC", "ACG"), 0);
    }

    #[test]
    fn empty_pattern_never_matches() {
        assert_eq!(count_occurrences("ACGT", ""), 0);
    }

    #[test]
    fn line_breaks_are_literal() {
        assert_eq!(count_occurrences("AC\nGT", "CG"), 0);
        assert_eq!(count_occurrences("AC\nAC", "AC"), 2);
    }

    #[test]
    fn ambiguity_codes_are_literal() {
        assert_eq!(count_occurrences("AAR", "AAR"), 1);
        assert_eq!(count_occurrences("AAG", "AAR"), 0);
        assert_eq!(count_occurrences("AAN", "AAA"), 0);
    }

    #[test]
    fn sequence_is_normalized_once() {
        let seq = Sequence::new("gattaca");
        assert_eq!(seq.as_str(), "GATTACA");
        assert_eq!(seq.len(), 7);
        assert_eq!(seq.count("TA"), 1);
        assert_eq!(seq.count("a"), 3);
    }
}
