//! Command implementations

pub mod benchmark;
pub mod query;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_query, run_benchmark};
pub use query::{QueryOptions, QueryOutcome, ResultRow, run_query};
