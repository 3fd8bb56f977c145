//! Test-only ratings tables and a trivial `Similarity` used by unit and
//! behaviour tests.

use crate::{
    Rating, RatingRecord, RatingScheme, RatingsTable, Similarity, SimilarityError, UserProfile,
};

/// Build a table from `(user, work, rating)` triples.
///
/// # Panics
/// Panics when a rating falls outside `scheme`; fixtures are expected to be
/// valid.
#[must_use]
pub fn table_from(scheme: RatingScheme, rows: &[(u64, u64, Rating)]) -> RatingsTable {
    let records = rows
        .iter()
        .map(|&(user_id, work_id, rating)| RatingRecord::new(user_id, work_id, rating))
        .collect();
    match RatingsTable::new(scheme, records) {
        Ok(table) => table,
        Err(err) => panic!("fixture rows must be valid: {err}"),
    }
}

/// Binary dataset: users 1 and 2 agree on work 10 and disagree on work 11.
///
/// | user | work | rating |
/// |------|------|--------|
/// | 1    | 10   | like   |
/// | 1    | 11   | dislike|
/// | 2    | 10   | like   |
/// | 2    | 11   | like   |
#[must_use]
pub fn binary_table() -> RatingsTable {
    table_from(
        RatingScheme::Binary,
        &[
            (1, 10, Rating::Like),
            (1, 11, Rating::Dislike),
            (2, 10, Rating::Like),
            (2, 11, Rating::Like),
        ],
    )
}

/// Four-level dataset with three users overlapping on works 20 to 23.
#[must_use]
pub fn four_level_table() -> RatingsTable {
    table_from(
        RatingScheme::FourLevel,
        &[
            (1, 20, Rating::Love),
            (1, 21, Rating::Like),
            (1, 22, Rating::Dislike),
            (1, 23, Rating::Neutral),
            (2, 20, Rating::Love),
            (2, 21, Rating::Neutral),
            (2, 22, Rating::Dislike),
            (3, 20, Rating::Like),
            (3, 23, Rating::Neutral),
            (3, 24, Rating::Love),
        ],
    )
}

/// `Similarity` that returns the same score for every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSimilarity(pub f64);

impl Similarity for ConstantSimilarity {
    fn similarity(&self, _a: &UserProfile, _b: &UserProfile) -> Result<f64, SimilarityError> {
        Ok(self.0)
    }
}
