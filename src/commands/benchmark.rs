//! Benchmark command
//!
//! Generates random queries and evaluates them in parallel against one
//! shared index.

use crate::core::{ALPHABET_SIZE, Letter, Slot, WORD_LENGTH};
use crate::index::{PositionalIndex, WordId};
use crate::query::{Constraint, Position, Query, QueryEngine};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub queries: usize,
    pub seed: u64,
    pub max_present: usize,
    pub max_absent: usize,
    /// Cross-check every result against a full corpus scan
    pub verify: bool,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(queries: usize) -> Self {
        Self {
            queries,
            seed: 42,
            max_present: 3,
            max_absent: 6,
            verify: false,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub corpus_size: usize,
    pub total_queries: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    pub empty_results: usize,
    /// Result counts keyed by number of decimal digits in the result size
    pub size_distribution: FxHashMap<u32, usize>,
    /// Queries whose indexed result disagreed with the scan (only with `verify`)
    pub mismatches: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Draw a random query with up to `max_present` / `max_absent` constraints
pub fn random_query<R: Rng>(rng: &mut R, max_present: usize, max_absent: usize) -> Query {
    let mut query = Query::new();
    for _ in 0..rng.random_range(0..=max_present) {
        query = query.require(random_constraint(rng));
    }
    for _ in 0..rng.random_range(0..=max_absent) {
        query = query.exclude(random_constraint(rng));
    }
    query
}

fn random_constraint<R: Rng>(rng: &mut R) -> Constraint {
    let letter = Letter::from_index(rng.random_range(0..ALPHABET_SIZE));
    let position = if rng.random_bool(0.5) {
        Position::Any
    } else {
        Position::At(Slot::from_index(rng.random_range(0..WORD_LENGTH)))
    };
    Constraint::new(letter, position)
}

/// Ids matching `query` by scanning every word
fn scan(index: &PositionalIndex, query: &Query) -> Vec<WordId> {
    index
        .words()
        .iter()
        .enumerate()
        .filter(|(_, word)| query.matches(word))
        .map(|(id, _)| id as WordId)
        .collect()
}

/// Number of decimal digits in `n`, with 0 for an empty result
fn size_bucket(n: usize) -> u32 {
    n.checked_ilog10().map_or(0, |digits| digits + 1)
}

/// Run the benchmark described by `config`
///
/// Queries are generated up front from the seed, so runs are repeatable;
/// evaluation fans out over the rayon thread pool.
pub fn run_benchmark(index: &PositionalIndex, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let queries: Vec<Query> = (0..config.queries)
        .map(|_| random_query(&mut rng, config.max_present, config.max_absent))
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(queries.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let engine = QueryEngine::new(index);
    let start = Instant::now();

    let outcomes: Vec<(usize, bool)> = queries
        .par_iter()
        .map(|query| {
            let ids = engine.evaluate(query);
            let agrees = !config.verify || ids == scan(index, query);
            if !agrees {
                warn!(%query, "indexed result disagrees with scan");
            }
            pb.inc(1);
            (ids.len(), agrees)
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let total_queries = outcomes.len();
    let total_matches: usize = outcomes.iter().map(|&(n, _)| n).sum();
    let mut size_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    for &(n, _) in &outcomes {
        *size_distribution.entry(size_bucket(n)).or_insert(0) += 1;
    }

    BenchmarkResult {
        corpus_size: index.len(),
        total_queries,
        total_matches,
        average_matches: if total_queries == 0 {
            0.0
        } else {
            total_matches as f64 / total_queries as f64
        },
        min_matches: outcomes.iter().map(|&(n, _)| n).min().unwrap_or(0),
        max_matches: outcomes.iter().map(|&(n, _)| n).max().unwrap_or(0),
        empty_results: outcomes.iter().filter(|&&(n, _)| n == 0).count(),
        size_distribution,
        mismatches: outcomes.iter().filter(|&&(_, agrees)| !agrees).count(),
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
