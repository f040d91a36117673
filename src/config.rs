use crate::{
    alphabet::BaseSet,
    cli::{Args, OutputFormat},
    error::KmerGenError,
    kmer::KmerLength,
};

/// Validated settings for a single counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sequence: String,
    pub k: KmerLength,
    pub base_set: BaseSet,
    pub format: OutputFormat,
    pub min_count: usize,
    pub parallel: bool,
    pub describe: bool,
}

impl Config {
    /// Validates raw k-mer length and base set arguments.
    ///
    /// Output settings start at their defaults.
    pub fn new(sequence: &str, k: &str, base_set: &str) -> Result<Config, KmerGenError> {
        let k: KmerLength = k.parse()?;
        let base_set: BaseSet = base_set.parse()?;

        Ok(Config {
            sequence: sequence.to_string(),
            k,
            base_set,
            format: OutputFormat::default(),
            min_count: 1,
            parallel: false,
            describe: false,
        })
    }

    pub fn from_args(args: &Args) -> Result<Config, KmerGenError> {
        Ok(Config {
            format: args.format,
            min_count: args.min_count,
            parallel: args.parallel,
            describe: args.describe,
            ..Config::new(&args.sequence, &args.k, &args.base_set)?
        })
    }
}
