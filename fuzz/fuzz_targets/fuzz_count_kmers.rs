//! Fuzz target for `count_kmers`.
//!
//! Feeds arbitrary text as the sequence and checks that every reported count
//! is positive and agrees with a direct literal search.

#![no_main]

use kmergen::alphabet::BaseSet;
use kmergen::matcher::count_occurrences;
use kmergen::run::count_kmers;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(sequence) = std::str::from_utf8(rest) else {
        return;
    };

    let tier = BaseSet::ALL[usize::from(selector % 4)];
    // Keep the candidate space small
    let k = usize::from(selector / 4 % 3) + 1;

    let counts = count_kmers(sequence, k, tier).expect("k is never zero");
    for (kmer, count) in &counts {
        assert!(*count > 0, "zero count for {kmer}");
        assert_eq!(*count, count_occurrences(sequence, kmer));
        assert!(kmer.chars().all(|c| tier.contains(c)));
    }
});
