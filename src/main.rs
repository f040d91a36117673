use std::process;

use clap::Parser;
use colored::Colorize;
use kmergen::{cli::Args, config::Config, run};

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let args = Args::parse();

    let config = Config::from_args(&args).unwrap_or_else(|e| {
        eprintln!();
        eprintln!(
            "{}\n {}",
            "Problem parsing arguments:".blue().bold(),
            e.to_string().blue()
        );
        eprintln!();
        eprintln!(
            "{}\n {}\n  {}\n   {}",
            "Help menu:".blue().bold(),
            "$ cargo run -- --help".bold(),
            "or".underline(),
            "$ kmergen --help".bold()
        );
        eprintln!();
        process::exit(1);
    });

    if !args.quiet {
        eprintln!("{}: {}", "k-length".bold(), config.k.to_string().blue().bold());
        eprintln!("{}: {}", "base set".bold(), config.base_set.name().blue().bold());
        eprintln!(
            "{}: {}",
            "sequence length".bold(),
            config.sequence.len().to_string().blue().bold()
        );
        eprintln!();
    }

    if let Err(e) = run::run(&config) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
