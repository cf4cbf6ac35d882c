//! Wordle Index - CLI
//!
//! Filter and rank five-letter words by positional letter constraints, from
//! the command line or an interactive TUI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::Path;
use tracing::{debug, info};
use wordle_index::{
    commands::{BenchmarkConfig, QueryOptions, run_benchmark, run_query},
    index::PositionalIndex,
    output::{print_benchmark_result, print_query_outcome},
    query::{Query, QueryRequest, parse_constraints},
    wordlists::loader::{load_embedded, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_index",
    about = "Positional inverted index for filtering and ranking Wordle candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_INDEX_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI explorer (default)
    Explore,

    /// Run a single query and print the matches
    Query {
        /// Constraints that must hold, e.g. "a1,n o"
        #[arg(short, long, default_value = "")]
        present: String,

        /// Constraints that must not hold, e.g. "t r2"
        #[arg(short = 'x', long, default_value = "")]
        absent: String,

        /// Read a JSON query document from a file ('-' for stdin)
        #[arg(long)]
        json: Option<String>,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Keep corpus order instead of ranking
        #[arg(long)]
        no_rank: bool,

        /// Also print letter frequencies across the matches
        #[arg(long)]
        histogram: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Benchmark query evaluation on random queries
    Benchmark {
        /// Number of random queries to run
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,

        /// Seed for query generation
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Cross-check every result against a full scan
        #[arg(long)]
        verify: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Build the index based on the -w flag
fn load_index(wordlist: &str) -> Result<PositionalIndex> {
    match wordlist {
        "embedded" => Ok(load_embedded()),
        path => load_from_file(path).with_context(|| format!("failed to load wordlist '{path}'")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let index = load_index(&cli.wordlist)?;
    info!(words = index.len(), "index ready");

    // Default to Explore mode if no command given
    let command = cli.command.unwrap_or(Commands::Explore);

    match command {
        Commands::Explore => run_explore_command(&index),
        Commands::Query {
            present,
            absent,
            json,
            limit,
            no_rank,
            histogram,
            format,
        } => {
            let query = build_query(json.as_deref(), &present, &absent)?;
            let options = QueryOptions {
                limit,
                rank: !no_rank,
                histogram,
            };
            run_query_command(&index, &query, &options, format)
        }
        Commands::Benchmark {
            count,
            seed,
            verify,
        } => {
            run_benchmark_command(&index, count, seed, verify);
            Ok(())
        }
    }
}

/// Combine an optional JSON document with the token arguments
fn build_query(json: Option<&str>, present: &str, absent: &str) -> Result<Query> {
    let base = match json {
        Some(source) => {
            let text = read_json_source(source)?;
            let request = QueryRequest::from_json(&text)?;
            Query::try_from(request)?
        }
        None => Query::new(),
    };

    let query = parse_constraints(present)
        .context("invalid --present constraints")?
        .into_iter()
        .fold(base, Query::require);
    let query = parse_constraints(absent)
        .context("invalid --absent constraints")?
        .into_iter()
        .fold(query, Query::exclude);

    debug!(%query, "built query");
    Ok(query)
}

fn read_json_source(source: &str) -> Result<String> {
    if source == "-" {
        io::read_to_string(io::stdin()).context("failed to read query document from stdin")
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("failed to read query document '{source}'"))
    }
}

fn run_query_command(
    index: &PositionalIndex,
    query: &Query,
    options: &QueryOptions,
    format: OutputFormat,
) -> Result<()> {
    let outcome = run_query(index, query, options);
    match format {
        OutputFormat::Text => print_query_outcome(&outcome),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}

fn run_benchmark_command(index: &PositionalIndex, count: usize, seed: u64, verify: bool) {
    println!(
        "Running {count} random queries against {} words...",
        index.len()
    );

    let config = BenchmarkConfig {
        seed,
        verify,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(index, &config);
    print_benchmark_result(&result);
}

fn run_explore_command(index: &PositionalIndex) -> Result<()> {
    use wordle_index::interactive::{App, run_tui};

    let app = App::new(index);
    run_tui(app)
}
