//! Scheme-driven choice of similarity metric.

use hivemind_core::{RatingScheme, Similarity, SimilarityError, UserProfile};

use crate::{AgreementRatio, LabelJaccard};

/// The similarity metric matching a dataset's rating scheme.
///
/// # Examples
/// ```
/// use hivemind_core::RatingScheme;
/// use hivemind_scorer::SimilarityMetric;
///
/// assert_eq!(
///     SimilarityMetric::for_scheme(RatingScheme::FourLevel),
///     SimilarityMetric::LabelJaccard,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityMetric {
    /// [`AgreementRatio`], used for binary datasets.
    AgreementRatio,
    /// [`LabelJaccard`], used for four-level datasets.
    LabelJaccard,
}

impl SimilarityMetric {
    /// Select the metric for `scheme`.
    #[must_use]
    pub const fn for_scheme(scheme: RatingScheme) -> Self {
        match scheme {
            RatingScheme::Binary => Self::AgreementRatio,
            RatingScheme::FourLevel => Self::LabelJaccard,
        }
    }

    /// Human-readable metric name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AgreementRatio => "agreement-ratio",
            Self::LabelJaccard => "label-jaccard",
        }
    }
}

impl std::fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Similarity for SimilarityMetric {
    fn similarity(&self, a: &UserProfile, b: &UserProfile) -> Result<f64, SimilarityError> {
        match self {
            Self::AgreementRatio => AgreementRatio.similarity(a, b),
            Self::LabelJaccard => LabelJaccard.similarity(a, b),
        }
    }
}
