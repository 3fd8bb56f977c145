//! Compare two users by the works they have both rated.
//!
//! The `Similarity` trait assigns an affinity score to a pair of
//! [`UserProfile`](crate::UserProfile)s. Concrete metrics live in the
//! `hivemind-scorer` crate.

use thiserror::Error;

use crate::UserProfile;

/// Errors raised while comparing two users.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// Neither user has rated anything, so the metric's denominator is zero.
    #[error("users {user_a} and {user_b} have no ratings between them")]
    NoRatings {
        /// First user of the comparison.
        user_a: u64,
        /// Second user of the comparison.
        user_b: u64,
    },
}

/// Calculate a pairwise affinity score between two users.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a batch of
/// recommendations can share one metric. Scores must be finite and the
/// metric must be symmetric: `similarity(a, b) == similarity(b, a)` exactly.
///
/// # Examples
///
/// ```rust
/// use hivemind_core::{Similarity, SimilarityError, UserProfile};
///
/// struct SharedWorks;
///
/// impl Similarity for SharedWorks {
///     fn similarity(&self, a: &UserProfile, b: &UserProfile) -> Result<f64, SimilarityError> {
///         Ok(if a.co_ratings(b).is_empty() { 0.0 } else { 1.0 })
///     }
/// }
///
/// let a = UserProfile::from_records(1, Vec::new());
/// let b = UserProfile::from_records(2, Vec::new());
/// assert_eq!(SharedWorks.similarity(&a, &b), Ok(0.0));
/// ```
pub trait Similarity: Send + Sync {
    /// Return the affinity between `a` and `b`.
    ///
    /// # Errors
    /// Returns [`SimilarityError`] when the metric is undefined for the pair.
    fn similarity(&self, a: &UserProfile, b: &UserProfile) -> Result<f64, SimilarityError>;
}

impl<S: Similarity + ?Sized> Similarity for &S {
    fn similarity(&self, a: &UserProfile, b: &UserProfile) -> Result<f64, SimilarityError> {
        (**self).similarity(a, b)
    }
}
