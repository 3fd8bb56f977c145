//! Score a batch of queries, isolating per-query failures.

use hivemind_core::{Query, Similarity};
use log::{info, warn};

use crate::{RecommendError, Recommendation, Recommender};

/// Result of scoring one query.
pub type QueryOutcome = Result<Recommendation, RecommendError>;

/// Counts of successful and failed queries in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Queries that produced a score.
    pub scored: usize,
    /// Queries whose recommendation failed.
    pub failed: usize,
}

/// Per-query outcomes of a batch, in query order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// One outcome per input query.
    pub outcomes: Vec<QueryOutcome>,
    /// Tally of the outcomes.
    pub summary: BatchSummary,
}

/// Score every query with `recommender`.
///
/// A failing query is logged and recorded as an error; it never stops the
/// remaining queries.
///
/// # Examples
///
/// ```
/// use hivemind_core::{Query, Rating, RatingRecord, RatingScheme, RatingsTable};
/// use hivemind_scorer::{Recommender, score_queries};
///
/// # fn main() -> Result<(), hivemind_core::RatingsTableError> {
/// let table = RatingsTable::new(
///     RatingScheme::Binary,
///     vec![RatingRecord::new(1, 10, Rating::Like)],
/// )?;
/// let report = score_queries(&Recommender::new(&table), &[Query::new(2, 10)]);
/// assert_eq!(report.summary.scored, 1);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn score_queries<S: Similarity>(
    recommender: &Recommender<'_, S>,
    queries: &[Query],
) -> BatchReport {
    let mut summary = BatchSummary::default();
    let outcomes = queries
        .iter()
        .map(|query| {
            let outcome = recommender.recommend(query.user_id, query.work_id);
            match &outcome {
                Ok(_) => summary.scored += 1,
                Err(err) => {
                    summary.failed += 1;
                    warn!(
                        "skipping user {} on work {}: {err}",
                        query.user_id, query.work_id
                    );
                }
            }
            outcome
        })
        .collect();
    info!(
        "scored {} of {} queries ({} failed)",
        summary.scored,
        queries.len(),
        summary.failed
    );
    BatchReport { outcomes, summary }
}
