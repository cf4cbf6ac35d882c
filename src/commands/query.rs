//! Query command
//!
//! Evaluates one query, ranks the matches and optionally summarises them.

use crate::index::PositionalIndex;
use crate::query::{Query, QueryEngine};
use crate::ranking::{LetterCount, letter_histogram, rank};
use serde::Serialize;

/// Options controlling how a query result is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Maximum number of rows to keep (`None` keeps all)
    pub limit: Option<usize>,
    /// Order rows by ranking score instead of corpus order
    pub rank: bool,
    /// Compute the letter histogram of the matches
    pub histogram: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            limit: None,
            rank: true,
            histogram: false,
        }
    }
}

/// One row of a query result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

/// Result of running a query
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub query: String,
    /// Number of matching words before `limit` was applied
    pub count: usize,
    pub words: Vec<ResultRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<Vec<LetterCount>>,
}

/// Evaluate `query` and shape the result according to `options`
///
/// The count and the histogram always cover every match; `limit` only
/// trims the rows.
#[must_use]
pub fn run_query(index: &PositionalIndex, query: &Query, options: &QueryOptions) -> QueryOutcome {
    let matches = QueryEngine::new(index).execute(query);

    let histogram = options
        .histogram
        .then(|| letter_histogram(&matches, query.present()));

    let mut words: Vec<ResultRow> = if options.rank {
        rank(&matches)
            .into_iter()
            .map(|scored| ResultRow {
                word: scored.word.text().to_string(),
                score: Some(scored.score),
            })
            .collect()
    } else {
        matches
            .iter()
            .map(|word| ResultRow {
                word: word.text().to_string(),
                score: None,
            })
            .collect()
    };

    if let Some(limit) = options.limit {
        words.truncate(limit);
    }

    QueryOutcome {
        query: query.to_string(),
        count: matches.len(),
        words,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_constraints;

    fn sample_index() -> PositionalIndex {
        PositionalIndex::build(["table", "tiles", "panic", "manic"])
    }

    fn row_texts(outcome: &QueryOutcome) -> Vec<&str> {
        outcome.words.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn ranked_by_default() {
        let outcome = run_query(&sample_index(), &Query::new(), &QueryOptions::default());
        assert_eq!(outcome.count, 4);
        assert_eq!(row_texts(&outcome), ["tiles", "table", "manic", "panic"]);
        assert_eq!(outcome.words[0].score, Some(6));
        assert!(outcome.histogram.is_none());
    }

    #[test]
    fn unranked_keeps_corpus_order() {
        let options = QueryOptions {
            rank: false,
            ..QueryOptions::default()
        };
        let outcome = run_query(&sample_index(), &Query::new(), &options);
        assert_eq!(row_texts(&outcome), ["table", "tiles", "panic", "manic"]);
        assert!(outcome.words.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn limit_trims_rows_but_not_count() {
        let options = QueryOptions {
            limit: Some(1),
            histogram: true,
            ..QueryOptions::default()
        };
        let query = Query::from_parts(Vec::new(), parse_constraints("t").unwrap());
        let outcome = run_query(&sample_index(), &query, &options);

        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.words.len(), 1);
        // Histogram covers both matches even though only one row is kept
        let histogram = outcome.histogram.unwrap();
        assert_eq!(histogram[0].count, 2);
    }

    #[test]
    fn outcome_serializes_to_json() {
        let options = QueryOptions {
            rank: false,
            ..QueryOptions::default()
        };
        let query = Query::from_parts(parse_constraints("p").unwrap(), Vec::new());
        let outcome = run_query(&sample_index(), &query, &options);
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"query":"present=[p] absent=[]","count":1,"words":[{"word":"panic"}]}"#
        );
    }
}
