//! Hive-mind aggregation of rater similarities into one recommendation.
//!
//! For a `(user, work)` pair the recommender compares the user with every
//! rater of the work. Similarities of raters in favour of the work are added
//! to the hive-mind sum and those of raters against it are subtracted. The
//! sum is averaged over the rater count and rescaled from `[-1, 1]` onto
//! `[0, 1]`.

#![forbid(unsafe_code)]

use hivemind_core::{RatingsTable, Similarity, SimilarityError, UserProfile, WorkProfile};
use log::debug;
use thiserror::Error;

use crate::SimilarityMetric;

/// Errors raised while producing a recommendation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// Comparing the user with one of the work's raters failed.
    #[error("cannot compare user {user_id} with rater {rater_id} of work {work_id}")]
    Similarity {
        /// User the recommendation was requested for.
        user_id: u64,
        /// Work being scored.
        work_id: u64,
        /// Rater whose comparison failed.
        rater_id: u64,
        /// Underlying similarity failure.
        #[source]
        source: SimilarityError,
    },
}

/// Outcome of a single recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    /// User the score was computed for.
    pub user_id: u64,
    /// Scored work.
    pub work_id: u64,
    /// Final score, clamped to `0.0..=1.0`.
    pub score: f64,
    /// Signed sum of rater similarities before averaging.
    pub hive_mind_sum: f64,
    /// Number of users who rated the work.
    pub rated_by: usize,
}

/// Scores `(user, work)` pairs against a shared ratings table.
///
/// The table is borrowed read-only, so one recommender can serve any number
/// of queries. Profiles are rebuilt from the table for every comparison.
///
/// # Examples
///
/// ```
/// use hivemind_core::{Rating, RatingRecord, RatingScheme, RatingsTable};
/// use hivemind_scorer::Recommender;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = RatingsTable::new(
///     RatingScheme::Binary,
///     vec![
///         RatingRecord::new(1, 10, Rating::Like),
///         RatingRecord::new(1, 11, Rating::Like),
///         RatingRecord::new(2, 11, Rating::Like),
///     ],
/// )?;
/// let recommender = Recommender::new(&table);
/// let recommendation = recommender.recommend(2, 10)?;
/// assert_eq!(recommendation.rated_by, 1);
/// assert!(recommendation.score > 0.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<'t, S = SimilarityMetric> {
    table: &'t RatingsTable,
    similarity: S,
}

impl<'t> Recommender<'t, SimilarityMetric> {
    /// Build a recommender using the metric that matches the table's scheme.
    #[must_use]
    pub const fn new(table: &'t RatingsTable) -> Self {
        Self {
            table,
            similarity: SimilarityMetric::for_scheme(table.scheme()),
        }
    }
}

impl<'t, S: Similarity> Recommender<'t, S> {
    /// Build a recommender with an explicit similarity metric.
    #[must_use]
    pub const fn with_similarity(table: &'t RatingsTable, similarity: S) -> Self {
        Self { table, similarity }
    }

    /// Table the recommender reads from.
    #[must_use]
    pub const fn table(&self) -> &'t RatingsTable {
        self.table
    }

    /// Metric used to compare users.
    #[must_use]
    pub const fn similarity(&self) -> &S {
        &self.similarity
    }

    /// Estimate how likely `user_id` is to enjoy `work_id`.
    ///
    /// A work nobody rated scores exactly `0.5`. Unknown users are compared
    /// with empty profiles.
    ///
    /// # Errors
    /// Returns [`RecommendError::Similarity`] when any comparison with a
    /// rater fails; the failure is not skipped, since dropping a rater would
    /// bias the score.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "aggregation averages similarities over the rater count"
    )]
    pub fn recommend(&self, user_id: u64, work_id: u64) -> Result<Recommendation, RecommendError> {
        let work = WorkProfile::build(work_id, self.table);
        let rated_by = work.rated_by();
        let user = UserProfile::build(user_id, self.table);

        let mut hive_mind_sum = 0.0_f64;
        for rater_id in work.positive_raters() {
            hive_mind_sum += self.compare(&user, rater_id, work_id)?;
        }
        for rater_id in work.negative_raters() {
            hive_mind_sum -= self.compare(&user, rater_id, work_id)?;
        }

        let mean = if rated_by > 0 {
            hive_mind_sum / rated_by as f64
        } else {
            hive_mind_sum
        };
        let rescaled = (mean + 1.0) / 2.0;
        debug!(
            "recommendation {rescaled} / rated by {rated_by} (user {user_id}, work {work_id})"
        );

        Ok(Recommendation {
            user_id,
            work_id,
            score: clamp_score(rescaled),
            hive_mind_sum,
            rated_by,
        })
    }

    fn compare(
        &self,
        user: &UserProfile,
        rater_id: u64,
        work_id: u64,
    ) -> Result<f64, RecommendError> {
        let rater = UserProfile::build(rater_id, self.table);
        self.similarity
            .similarity(user, &rater)
            .map_err(|source| RecommendError::Similarity {
                user_id: user.user_id(),
                work_id,
                rater_id,
                source,
            })
    }
}

/// Clamp a rescaled score into `0.0..=1.0`.
///
/// Non-finite values map to the neutral `0.5`.
#[must_use]
pub const fn clamp_score(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.5
    }
}
