//! Agreement-ratio similarity for binary datasets.
//!
//! Two users are compared on the works both have rated. Each shared work
//! counts as an agreement when the ratings match and a disagreement
//! otherwise. The net agreement is divided by the total rating activity of
//! both users, not only the overlap, so users with few shared works stay
//! close to zero.

#![forbid(unsafe_code)]

use hivemind_core::{Similarity, SimilarityError, UserProfile};

/// `(agreements - disagreements) / (ratings by a + ratings by b)`.
///
/// The score lies in `[-0.5, 0.5]` for tables without repeated
/// `(user, work)` rows: the overlap can never exceed either user's own rating
/// count, so an identical copy of a user scores `0.5`.
///
/// # Examples
///
/// ```
/// use hivemind_core::{Rating, RatingRecord, Similarity, UserProfile};
/// use hivemind_scorer::AgreementRatio;
///
/// let a = UserProfile::from_records(1, vec![RatingRecord::new(1, 10, Rating::Like)]);
/// let b = UserProfile::from_records(2, vec![RatingRecord::new(2, 10, Rating::Like)]);
/// assert_eq!(AgreementRatio.similarity(&a, &b), Ok(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgreementRatio;

/// Shared-work tally between two users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Agreement {
    /// Shared works rated identically.
    pub agreements: usize,
    /// Shared works rated differently.
    pub disagreements: usize,
}

impl Agreement {
    /// Tally agreements over the inner join of both users' ratings.
    #[must_use]
    pub fn between(a: &UserProfile, b: &UserProfile) -> Self {
        a.co_ratings(b)
            .iter()
            .fold(Self::default(), |mut tally, pair| {
                if pair.own == pair.other {
                    tally.agreements += 1;
                } else {
                    tally.disagreements += 1;
                }
                tally
            })
    }
}

impl Similarity for AgreementRatio {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the ratio divides rating counts that fit comfortably in f64"
    )]
    fn similarity(&self, a: &UserProfile, b: &UserProfile) -> Result<f64, SimilarityError> {
        let total = a.counts().total() + b.counts().total();
        if total == 0 {
            return Err(SimilarityError::NoRatings {
                user_a: a.user_id(),
                user_b: b.user_id(),
            });
        }
        let tally = Agreement::between(a, b);
        let net = tally.agreements as f64 - tally.disagreements as f64;
        Ok(net / total as f64)
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for the agreement ratio.

    use hivemind_core::test_support::binary_table;
    use hivemind_core::{Rating, RatingRecord, Similarity, SimilarityError, UserProfile};
    use rstest::rstest;

    use super::{Agreement, AgreementRatio};

    #[rstest]
    fn tallies_agreements_and_disagreements() {
        let table = binary_table();
        let first = UserProfile::build(1, &table);
        let second = UserProfile::build(2, &table);
        assert_eq!(
            Agreement::between(&first, &second),
            Agreement {
                agreements: 1,
                disagreements: 1,
            }
        );
    }

    #[rstest]
    fn net_zero_when_agreements_cancel() {
        let table = binary_table();
        let first = UserProfile::build(1, &table);
        let second = UserProfile::build(2, &table);
        assert_eq!(AgreementRatio.similarity(&second, &first), Ok(0.0));
    }

    #[rstest]
    fn identical_copy_scores_one_half() {
        let table = binary_table();
        let original = UserProfile::build(1, &table);
        let copy = UserProfile::from_records(
            7,
            original
                .records()
                .iter()
                .map(|r| RatingRecord::new(7, r.work_id, r.rating))
                .collect(),
        );
        // Two agreements over 2 + 2 ratings.
        assert_eq!(AgreementRatio.similarity(&original, &copy), Ok(0.5));
    }

    #[rstest]
    fn disjoint_users_score_zero() {
        let a = UserProfile::from_records(1, vec![RatingRecord::new(1, 10, Rating::Like)]);
        let b = UserProfile::from_records(2, vec![RatingRecord::new(2, 11, Rating::Dislike)]);
        assert_eq!(AgreementRatio.similarity(&a, &b), Ok(0.0));
    }

    #[rstest]
    fn full_disagreement_scores_minus_one_half() {
        let a = UserProfile::from_records(1, vec![RatingRecord::new(1, 10, Rating::Like)]);
        let b = UserProfile::from_records(2, vec![RatingRecord::new(2, 10, Rating::Dislike)]);
        assert_eq!(AgreementRatio.similarity(&a, &b), Ok(-0.5));
    }

    #[rstest]
    fn users_without_ratings_cannot_be_compared() {
        let a = UserProfile::from_records(1, Vec::new());
        let b = UserProfile::from_records(2, Vec::new());
        assert_eq!(
            AgreementRatio.similarity(&a, &b),
            Err(SimilarityError::NoRatings {
                user_a: 1,
                user_b: 2,
            })
        );
    }

    #[rstest]
    fn one_empty_user_is_enough_to_compare() {
        let a = UserProfile::from_records(1, vec![RatingRecord::new(1, 10, Rating::Like)]);
        let b = UserProfile::from_records(2, Vec::new());
        assert_eq!(AgreementRatio.similarity(&a, &b), Ok(0.0));
    }
}
