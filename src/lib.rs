//! Facade crate for the hivemind recommender.
//!
//! This crate re-exports the rating vocabulary, profiles and the
//! collaborative-filtering scorer so downstream users depend on one crate.

#![forbid(unsafe_code)]

pub use hivemind_core::{
    CategoryCounts, CoRating, Polarity, Query, Rating, RatingParseError, RatingRecord,
    RatingScheme, RatingsTable, RatingsTableError, Similarity, SimilarityError,
    UnknownSchemeError, UserProfile, WorkProfile,
};

pub use hivemind_scorer::{
    Agreement, AgreementRatio, BatchReport, BatchSummary, LabelJaccard, QueryOutcome,
    RecommendError, Recommendation, Recommender, SimilarityMetric, clamp_score, score_queries,
};

#[cfg(feature = "test-support")]
pub use hivemind_core::test_support;
