//! Label-agreement Jaccard similarity for four-level datasets.
//!
//! Shared works are encoded as ordinals (`dislike = 0` through `love = 3`)
//! and the score is the fraction of positions where both encoded vectors
//! carry the same label.

#![forbid(unsafe_code)]

use hivemind_core::{CoRating, Rating, Similarity, SimilarityError, UserProfile};

/// Fraction of shared works both users rated with the same label.
///
/// The score is `0.0` when the users share no works, or when either user's
/// side of the overlap is made entirely of `dislike` ratings. Applying the
/// guard to both sides keeps the metric symmetric.
///
/// # Examples
///
/// ```
/// use hivemind_core::{Rating, RatingRecord, Similarity, UserProfile};
/// use hivemind_scorer::LabelJaccard;
///
/// let a = UserProfile::from_records(
///     1,
///     vec![
///         RatingRecord::new(1, 10, Rating::Love),
///         RatingRecord::new(1, 11, Rating::Like),
///     ],
/// );
/// let b = UserProfile::from_records(
///     2,
///     vec![
///         RatingRecord::new(2, 10, Rating::Love),
///         RatingRecord::new(2, 11, Rating::Neutral),
///     ],
/// );
/// assert_eq!(LabelJaccard.similarity(&a, &b), Ok(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelJaccard;

impl LabelJaccard {
    /// Score an already-joined overlap.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the score is a ratio of small counts"
    )]
    pub fn score_overlap(overlap: &[CoRating]) -> f64 {
        if overlap.is_empty()
            || all_disliked(overlap, |pair| pair.own)
            || all_disliked(overlap, |pair| pair.other)
        {
            return 0.0;
        }
        let matching = overlap
            .iter()
            .filter(|pair| pair.own.ordinal() == pair.other.ordinal())
            .count();
        matching as f64 / overlap.len() as f64
    }
}

fn all_disliked(overlap: &[CoRating], side: impl Fn(&CoRating) -> Rating) -> bool {
    overlap.iter().all(|pair| side(pair).ordinal() == 0)
}

impl Similarity for LabelJaccard {
    fn similarity(&self, a: &UserProfile, b: &UserProfile) -> Result<f64, SimilarityError> {
        Ok(Self::score_overlap(&a.co_ratings(b)))
    }
}
