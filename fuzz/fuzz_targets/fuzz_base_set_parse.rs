//! Fuzz target for base set and k-mer length parsing.
//!
//! Parsing must never panic, and whatever parses must display back to a name
//! that parses to the same value.

#![no_main]

use kmergen::alphabet::BaseSet;
use kmergen::kmer::KmerLength;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    if let Ok(base_set) = input.parse::<BaseSet>() {
        assert_eq!(base_set.to_string().parse::<BaseSet>().ok(), Some(base_set));
    }

    if let Ok(k) = input.parse::<KmerLength>() {
        assert!(k.get() >= KmerLength::MIN);
    }
});
