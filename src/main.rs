use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordscan::{bench_log, wordlist, Matches, WordscanError};

/// Search a word list for a literal pattern using parallel workers.
#[derive(Parser, Debug)]
#[command(name = "wordscan", version, about, long_about = None)]
struct Args {
    /// File with one word per line
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Literal pattern to search for (may be empty)
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Match regardless of letter case
    #[arg(long)]
    ignore_case: bool,

    /// Print only the number of matches
    #[arg(long)]
    count_only: bool,

    /// Number of worker threads (default: available cores, at most 8)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Benchmark log to append a row to
    #[arg(long, value_name = "PATH", default_value = bench_log::DEFAULT_LOG)]
    log: PathBuf,

    /// Do not write a benchmark row
    #[arg(long, conflicts_with = "log")]
    no_log: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), WordscanError> {
    let words = wordlist::load_words(&args.input)?;

    let mut builder = wordscan::search(&words)
        .pattern(args.pattern.as_str())
        .ignore_case(args.ignore_case)
        .count_only(args.count_only);
    if let Some(n) = args.threads {
        builder = builder.threads(n);
    }

    // load_words never returns an empty list
    let Some(outcome) = builder.run()? else {
        return Err(WordscanError::EmptyWordList(args.input.clone()));
    };

    println!("Search completed in {}ms", outcome.elapsed.as_millis());
    println!("Matches found: {}", outcome.match_count());

    if let Matches::Words(found) = &outcome.matches {
        for word in found {
            println!("{word}");
        }
    }

    if !args.no_log {
        bench_log::append(&args.log, &args.pattern, &outcome)?;
    }
    Ok(())
}
